//! The Magic Image AI emblem.
//!
//! Painted back to front onto a transparent square canvas:
//! a radial gradient disc, a small node graph, four gold stars and a wand.
//! Every coordinate is derived from the canvas size, so the same size always
//! yields the same pixels.

use crate::draw::{fill_ellipse, fill_polygon, star_points, stroke_line, Point};
use image::{Rgba, RgbaImage};

/// Graph vertices, as fractions of the canvas centre on each axis.
pub const NODE_POSITIONS: [Point; 8] = [
    (0.5, 0.6), // top left
    (1.0, 0.4), // top
    (1.5, 0.6), // top right
    (0.6, 1.0), // left
    (1.4, 1.0), // right
    (0.5, 1.4), // bottom left
    (1.0, 1.6), // bottom
    (1.5, 1.4), // bottom right
];

/// Graph edges, as index pairs into [`NODE_POSITIONS`].
pub const CONNECTIONS: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (0, 3),
    (2, 4),
    (3, 5),
    (4, 7),
    (5, 6),
    (7, 6),
    (1, 3),
    (1, 4),
    (3, 6),
    (4, 6),
];

/// Star centres, as fractions of the canvas centre on each axis.
pub const STAR_POSITIONS: [Point; 4] = [(0.3, 0.3), (1.7, 0.2), (1.8, 1.7), (0.2, 1.6)];

// Disc gradient stops, outer rim to centre
const GRADIENT_RIM: [f32; 3] = [99.0, 102.0, 241.0];
const GRADIENT_MID: [f32; 3] = [236.0, 156.0, 255.0];
// Green overshoots 8 bits; channels are clamped on output
const GRADIENT_CORE: [f32; 3] = [99.0, 256.0, 255.0];
const DISC_ALPHA: f32 = 240.0;

const EDGE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 120]);
const NODE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 200]);
const STAR_COLOR: Rgba<u8> = Rgba([255, 215, 0, 220]);
const HANDLE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const HEAD_COLOR: Rgba<u8> = Rgba([255, 215, 0, 255]);

const EDGE_WIDTH: f32 = 2.0;
const HANDLE_WIDTH: f32 = 3.0;
const STAR_INNER_RATIO: f32 = 0.35;

/// Render the emblem onto a new `size`×`size` canvas.
///
/// Sizes below 16 are accepted; elements whose derived dimensions round
/// down to zero are simply not drawn.
pub fn render(size: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(size, size);
    let center = size / 2;

    draw_disc(&mut canvas, center);
    draw_graph(&mut canvas, size, center);
    draw_stars(&mut canvas, size, center);
    draw_wand(&mut canvas, size, center);

    canvas
}

/// Disc colour at `progress` from the rim (0.0) towards the centre (1.0).
///
/// Two linear segments meet at 0.5: rim purple to pink, then pink to light
/// blue. Colour channels truncate; alpha fades slightly and rounds.
pub fn gradient_color(progress: f32) -> Rgba<u8> {
    let (from, to, t) = if progress < 0.5 {
        (GRADIENT_RIM, GRADIENT_MID, progress * 2.0)
    } else {
        (GRADIENT_MID, GRADIENT_CORE, (progress - 0.5) * 2.0)
    };

    let channel = |i: usize| (from[i] + t * (to[i] - from[i])).clamp(0.0, 255.0) as u8;
    let alpha = (DISC_ALPHA * (1.0 - progress * 0.1)).round().clamp(0.0, 255.0) as u8;

    Rgba([channel(0), channel(1), channel(2), alpha])
}

/// Concentric filled circles, largest first, so each smaller ring paints
/// over the previous one.
fn draw_disc(canvas: &mut RgbaImage, center: u32) {
    let outer = i64::from(center) - 2;
    let c = center as f32;

    for radius in (1..=outer).rev() {
        let progress = (outer - radius) as f32 / outer as f32;
        let r = radius as f32;
        fill_ellipse(canvas, (c - r, c - r), (c + r, c + r), gradient_color(progress));
    }
}

fn draw_graph(canvas: &mut RgbaImage, size: u32, center: u32) {
    let c = center as f32;
    let nodes = NODE_POSITIONS.map(|(fx, fy)| (fx * c, fy * c));

    for (start, end) in CONNECTIONS {
        stroke_line(canvas, nodes[start], nodes[end], EDGE_WIDTH, EDGE_COLOR);
    }

    let radius = (size / 16) as f32;
    for (x, y) in nodes {
        fill_ellipse(canvas, (x - radius, y - radius), (x + radius, y + radius), NODE_COLOR);
    }
}

fn draw_stars(canvas: &mut RgbaImage, size: u32, center: u32) {
    let c = center as f32;

    for (i, (fx, fy)) in STAR_POSITIONS.into_iter().enumerate() {
        // Alternate stars are one pixel larger
        let outer = (size / 20 + i as u32 % 2) as f32;
        let points = star_points((fx * c, fy * c), outer, outer * STAR_INNER_RATIO);
        fill_polygon(canvas, &points, STAR_COLOR);
    }
}

/// Handle runs lower-left to upper-right through the centre; the head sits
/// just past its upper end.
fn draw_wand(canvas: &mut RgbaImage, size: u32, center: u32) {
    let brush = i64::from(size / 6);
    let c = i64::from(center);
    let at = |x: i64, y: i64| (x as f32, y as f32);

    stroke_line(
        canvas,
        at(c - brush / 2, c + brush / 2),
        at(c + brush / 2, c - brush / 2),
        HANDLE_WIDTH,
        HANDLE_COLOR,
    );

    fill_ellipse(
        canvas,
        at(c + brush / 3, c - brush / 2 - 2),
        at(c + brush / 2 + 2, c - brush / 3 + 2),
        HEAD_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

    fn assert_pixel_near(actual: &Rgba<u8>, expected: [u8; 4]) {
        for (a, e) in actual.0.iter().zip(expected) {
            assert!(
                a.abs_diff(e) <= 1,
                "expected {:?}, got {:?}",
                expected,
                actual.0
            );
        }
    }

    #[test]
    fn test_render_is_square_for_every_icon_size() {
        for size in ICON_SIZES {
            let canvas = render(size);
            assert_eq!(canvas.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_centre_and_innermost_ring_are_visible() {
        for size in ICON_SIZES {
            let canvas = render(size);
            let center = size / 2;
            assert!(canvas.get_pixel(center, center)[3] > 0, "centre of {size}px");
            assert!(canvas.get_pixel(center + 1, center)[3] > 0, "ring of {size}px");
            assert!(canvas.get_pixel(center, center - 1)[3] > 0, "ring of {size}px");
        }
    }

    #[test]
    fn test_corners_stay_transparent() {
        for size in ICON_SIZES {
            let canvas = render(size);
            assert_eq!(canvas.get_pixel(0, 0)[3], 0);
            assert_eq!(canvas.get_pixel(size - 1, size - 1)[3], 0);
        }
    }

    #[test]
    fn test_disc_rim_uses_first_gradient_stop() {
        let canvas = render(256);
        // Radius 126 is the outermost ring and the only one reaching y = 2
        assert_pixel_near(canvas.get_pixel(128, 2), [99, 102, 241, 240]);
        assert_eq!(canvas.get_pixel(128, 1)[3], 0);
    }

    #[test]
    fn test_star_sits_outside_the_disc_in_gold() {
        let canvas = render(256);
        assert_pixel_near(canvas.get_pixel(38, 38), [255, 215, 0, 220]);
    }

    #[test]
    fn test_nodes_are_painted_over_the_disc() {
        let canvas = render(256);
        let node = canvas.get_pixel(64, 77);
        assert!(node[3] > 240);
        assert!(node[0] > 200 && node[1] > 200 && node[2] > 200, "{:?}", node);
    }

    #[test]
    fn test_wand_handle_and_head() {
        let canvas = render(256);
        assert_pixel_near(canvas.get_pixel(120, 136), [255, 255, 255, 255]);
        assert_pixel_near(canvas.get_pixel(146, 110), [255, 215, 0, 255]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render(256);
        let second = render(256);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_tiny_sizes_do_not_panic() {
        for size in 0..16 {
            let canvas = render(size);
            assert_eq!(canvas.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_gradient_stops() {
        assert_eq!(gradient_color(0.0), Rgba([99, 102, 241, 240]));
        assert_pixel_near(&gradient_color(0.5), [236, 156, 255, 228]);
        // The core stop is clamped into 8 bits
        assert_eq!(gradient_color(1.0), Rgba([99, 255, 255, 216]));
    }

    #[test]
    fn test_gradient_is_continuous_within_each_half() {
        let steps = 1000;
        let mut previous = gradient_color(0.0);
        for step in 1..=steps {
            let progress = step as f32 / steps as f32;
            let current = gradient_color(progress);
            for channel in 0..4 {
                let jump = previous[channel].abs_diff(current[channel]);
                assert!(jump <= 1, "jump of {jump} in channel {channel} at {progress}");
            }
            previous = current;
        }
    }

    #[test]
    fn test_layout_tables_are_consistent() {
        for (start, end) in CONNECTIONS {
            assert!(start < NODE_POSITIONS.len() && end < NODE_POSITIONS.len());
            assert_ne!(start, end);
        }
        for (fx, fy) in NODE_POSITIONS.into_iter().chain(STAR_POSITIONS) {
            assert!((0.0..=2.0).contains(&fx) && (0.0..=2.0).contains(&fy));
        }
    }
}
