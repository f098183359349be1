//! Raster primitives used to paint the emblem.
//!
//! Every primitive clips to the canvas and composites its colour over the
//! existing pixels with straight-alpha "over" blending. A primitive blends
//! each pixel at most once, so a wide stroke or an overlapping polygon never
//! darkens its own interior.

use image::{Pixel, Rgba, RgbaImage};
use std::f32::consts::PI;

/// A point in pixel space. Pixel `(x, y)` is sampled at its integer coordinate.
pub type Point = (f32, f32);

/// Blend `color` into every pixel of the clipped box `min..=max` accepted by `covers`.
fn fill_where<F>(canvas: &mut RgbaImage, min: Point, max: Point, color: Rgba<u8>, covers: F)
where
    F: Fn(f32, f32) -> bool,
{
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let x_end = max.0.ceil().min((width - 1) as f32);
    let y_end = max.1.ceil().min((height - 1) as f32);
    // Also rejects NaN bounds
    if !(x_end >= 0.0 && y_end >= 0.0) {
        return;
    }
    let x_start = min.0.floor().max(0.0) as u32;
    let y_start = min.1.floor().max(0.0) as u32;

    for y in y_start..=y_end as u32 {
        for x in x_start..=x_end as u32 {
            if covers(x as f32, y as f32) {
                canvas.get_pixel_mut(x, y).blend(&color);
            }
        }
    }
}

/// Fill the ellipse inscribed in the inclusive bounding box `top_left..=bottom_right`.
///
/// A box with no width or no height draws nothing.
pub fn fill_ellipse(canvas: &mut RgbaImage, top_left: Point, bottom_right: Point, color: Rgba<u8>) {
    let (x0, y0) = top_left;
    let (x1, y1) = bottom_right;
    if !(x1 > x0 && y1 > y0) {
        return;
    }

    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (rx, ry) = ((x1 - x0) / 2.0, (y1 - y0) / 2.0);
    // Unnormalised form keeps integer radii exact in f32
    let (rx2, ry2) = (rx * rx, ry * ry);
    let limit = rx2 * ry2;

    fill_where(canvas, top_left, bottom_right, color, |x, y| {
        let (dx, dy) = (x - cx, y - cy);
        dx * dx * ry2 + dy * dy * rx2 <= limit
    });
}

/// Stroke the segment `from..to` with a butt-capped line `width` pixels wide.
///
/// A pixel is covered when its perpendicular offset from the segment lies in
/// `[-width / 2, width / 2)` and it projects onto the segment itself.
pub fn stroke_line(canvas: &mut RgbaImage, from: Point, to: Point, width: f32, color: Rgba<u8>) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 || width <= 0.0 {
        return;
    }

    let length = length_sq.sqrt();
    let half = width / 2.0;
    let min = (from.0.min(to.0) - half, from.1.min(to.1) - half);
    let max = (from.0.max(to.0) + half, from.1.max(to.1) + half);

    fill_where(canvas, min, max, color, |x, y| {
        let (px, py) = (x - from.0, y - from.1);
        let along = (px * dx + py * dy) / length_sq;
        let offset = (px * dy - py * dx) / length;
        (0.0..=1.0).contains(&along) && offset >= -half && offset < half
    });
}

/// Fill a closed polygon using the even-odd rule.
pub fn fill_polygon(canvas: &mut RgbaImage, points: &[Point], color: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let (min, max) = points.iter().fold(
        ((f32::MAX, f32::MAX), (f32::MIN, f32::MIN)),
        |(min, max), &(x, y)| ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y))),
    );

    fill_where(canvas, min, max, color, |x, y| polygon_contains(points, x, y));
}

fn polygon_contains(points: &[Point], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Vertices of a four-pointed star, alternating between the `outer` tips and
/// the `inner` notches. The first tip points straight up.
pub fn star_points(center: Point, outer: f32, inner: f32) -> [Point; 8] {
    std::array::from_fn(|k| {
        let angle = k as f32 * PI / 4.0 - PI / 2.0;
        let radius = if k % 2 == 0 { outer } else { inner };
        (center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
    })
}
