use collinear_points::Point;
use std::collections::HashSet;

/// Points of a `side` x `side` grid, dense in collinear runs
pub fn grid_points(side: i32) -> Vec<Point> {
    (0..side)
        .flat_map(|x| (0..side).map(move |y| Point::new(x * 100, y * 100)))
        .collect()
}

/// `n` distinct pseudo-random points in `0..32768`, few collinear runs
pub fn scattered_points(n: usize) -> Vec<Point> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) % 32768) as i32
    };

    let mut seen = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let p = Point::new(next(), next());
        if seen.insert(p) {
            points.push(p);
        }
    }
    points
}
