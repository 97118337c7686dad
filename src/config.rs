use std::sync::OnceLock;

/// Default point count at which `Algorithm::Auto` switches to the parallel detector
pub const DEFAULT_PARALLEL_MIN_POINTS: usize = 512;

/// Default inclusive upper bound for coordinates read by the input tools
pub const DEFAULT_MAX_COORD: i32 = 32767;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_i32(name: &str, default: i32) -> i32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_POINTS: OnceLock<usize> = OnceLock::new();

/// Input size from which the fast detector shards pivots across threads
pub fn parallel_min_points() -> usize {
    *PARALLEL_MIN_POINTS.get_or_init(|| {
        parse_env_usize("COLLINEAR_PARALLEL_MIN_POINTS", DEFAULT_PARALLEL_MIN_POINTS).max(4)
    })
}

static MAX_COORD: OnceLock<i32> = OnceLock::new();

/// Largest coordinate accepted when parsing point files
pub fn max_coord() -> i32 {
    *MAX_COORD.get_or_init(|| parse_env_i32("COLLINEAR_MAX_COORD", DEFAULT_MAX_COORD).max(0))
}
