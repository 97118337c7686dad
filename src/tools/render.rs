/// Draw points and detected segments onto an RGB canvas
use crate::error::Result;
use crate::models::{LineSegment, Point};
use image::{Rgb, RgbImage};
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const POINT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const SEGMENT_COLOR: Rgb<u8> = Rgb([200, 30, 30]);
const MARGIN: u32 = 8;

/// Maps point coordinates onto a square canvas, y axis pointing up
struct Viewport {
    min_x: i64,
    min_y: i64,
    span: f64,
    pixels: f64,
    size: u32,
}

impl Viewport {
    fn fit(points: &[Point], size: u32) -> Self {
        let min_x = points.iter().map(|p| p.x as i64).min().unwrap_or(0);
        let max_x = points.iter().map(|p| p.x as i64).max().unwrap_or(0);
        let min_y = points.iter().map(|p| p.y as i64).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y as i64).max().unwrap_or(0);
        let span = (max_x - min_x).max(max_y - min_y).max(1) as f64;
        let pixels = size.saturating_sub(2 * MARGIN).max(1) as f64 - 1.0;
        Self {
            min_x,
            min_y,
            span,
            pixels: pixels.max(0.0),
            size,
        }
    }

    fn project(&self, p: &Point) -> (i64, i64) {
        let x = ((p.x as i64 - self.min_x) as f64 / self.span * self.pixels).round() as i64;
        let y = ((p.y as i64 - self.min_y) as f64 / self.span * self.pixels).round() as i64;
        let x = x + MARGIN as i64;
        let y = self.size as i64 - 1 - MARGIN as i64 - y;
        (x, y)
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line between two pixel positions
fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Render `points` as dots and `segments` as lines on a `size` x `size` canvas
pub fn render_segments(points: &[Point], segments: &[LineSegment], size: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(size, size, BACKGROUND);
    if size == 0 {
        return img;
    }
    let view = Viewport::fit(points, size);

    for seg in segments {
        draw_line(&mut img, view.project(&seg.p), view.project(&seg.q), SEGMENT_COLOR);
    }
    for p in points {
        let (cx, cy) = view.project(p);
        for dy in -1..=1 {
            for dx in -1..=1 {
                put(&mut img, cx + dx, cy + dy, POINT_COLOR);
            }
        }
    }

    img
}

/// Render and write the picture to `path` (format chosen from the extension)
pub fn save_render<P: AsRef<Path>>(
    path: P,
    points: &[Point],
    segments: &[LineSegment],
    size: u32,
) -> Result<()> {
    render_segments(points, segments, size).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_points_and_segment() {
        let points: Vec<Point> = (0..4).map(|i| Point::new(i * 10, i * 10)).collect();
        let seg = LineSegment::new(points[0], points[3]);
        let img = render_segments(&points, &[seg], 64);

        assert_eq!(img.dimensions(), (64, 64));
        // Lowest point sits in the bottom-left corner inside the margin
        assert_eq!(*img.get_pixel(MARGIN, 63 - MARGIN), POINT_COLOR);
        // Highest point in the top-right corner
        assert_eq!(*img.get_pixel(63 - MARGIN, MARGIN), POINT_COLOR);
        let red = img.pixels().filter(|&&p| p == SEGMENT_COLOR).count();
        assert!(red > 10, "segment pixels drawn: {}", red);
    }

    #[test]
    fn test_render_empty() {
        let img = render_segments(&[], &[], 16);
        assert!(img.pixels().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn test_bresenham_endpoints() {
        let mut img = RgbImage::from_pixel(10, 10, BACKGROUND);
        draw_line(&mut img, (1, 2), (8, 5), SEGMENT_COLOR);
        assert_eq!(*img.get_pixel(1, 2), SEGMENT_COLOR);
        assert_eq!(*img.get_pixel(8, 5), SEGMENT_COLOR);
    }
}
