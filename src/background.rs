//! Procedural pixel-art background.
//!
//! The background is a grid of 8×8 tiles. Each tile takes its base color from
//! a vertical dark-teal → light-teal gradient and is nudged by a small
//! per-tile jitter so the sky does not look like a flat ramp. A two-layer sun
//! sits in the top-right corner.
//!
//! Everything here is a pure function of tile coordinates: drawing twice on
//! fresh canvases yields identical pixels.
//!
//! # Gradient
//!
//! For a tile whose top row is `y`, with `t = y / BASE_HEIGHT`:
//!
//! ```text
//! r = 12 +  20·t
//! g = 30 + 110·t
//! b = 40 + 100·t
//! ```
//!
//! # Jitter
//!
//! ```text
//! jitter = ((x·31) XOR (y·17)) mod 12 − 6     ∈ [-6, 5]
//! ```
//!
//! added to every channel and clamped to `0..=255`.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::colors::{SUN_INNER, SUN_OUTER};
use crate::config::{BASE_HEIGHT, SUN_CENTER_X, SUN_CENTER_Y, SUN_INNER_RADIUS, SUN_OUTER_RADIUS, TILE_SIZE};

/// Deterministic per-tile color offset derived from the tile origin.
#[inline]
pub const fn tile_jitter(
    x: u32,
    y: u32,
) -> i32 {
    (((x * 31) ^ (y * 17)) % 12) as i32 - 6
}

/// Gradient color for the tile whose top-left corner is `(x, y)`, jitter applied.
pub fn tile_color(
    x: u32,
    y: u32,
) -> Rgb888 {
    let t = y as f32 / BASE_HEIGHT as f32;
    let jitter = tile_jitter(x, y);
    let channel = |base: f32, span: f32| ((base + span * t) as i32 + jitter).clamp(0, 255) as u8;
    Rgb888::new(channel(12.0, 20.0), channel(30.0, 110.0), channel(40.0, 100.0))
}

/// Fill every pixel within `radius` of `center` (`dx² + dy² <= r²`).
fn fill_disc<D>(
    target: &mut D,
    center: Point,
    radius: i32,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let r2 = radius * radius;
    let pixels = (-radius..=radius).flat_map(move |dy| {
        (-radius..=radius)
            .filter(move |dx| dx * dx + dy * dy <= r2)
            .map(move |dx| Pixel(center + Point::new(dx, dy), color))
    });
    target.draw_iter(pixels)
}

/// Draw the sun: a dim outer disc with a bright inner disc on top.
pub fn draw_sun<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let center = Point::new(SUN_CENTER_X, SUN_CENTER_Y);
    fill_disc(target, center, SUN_OUTER_RADIUS, SUN_OUTER)?;
    fill_disc(target, center, SUN_INNER_RADIUS, SUN_INNER)
}

/// Fill `target` with the tiled gradient and the sun.
///
/// The whole target is covered, so no clear is needed beforehand.
pub fn draw_pixel_background<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    let size = target.size();
    for y in (0..size.height).step_by(TILE_SIZE as usize) {
        for x in (0..size.width).step_by(TILE_SIZE as usize) {
            Rectangle::new(Point::new(x as i32, y as i32), Size::new_equal(TILE_SIZE))
                .into_styled(PrimitiveStyle::with_fill(tile_color(x, y)))
                .draw(target)?;
        }
    }
    draw_sun(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BASE_WIDTH;
    use crate::surface::Canvas;

    fn base_canvas() -> Canvas {
        Canvas::new(Size::new(BASE_WIDTH, BASE_HEIGHT))
    }

    // -------------------------------------------------------------------------
    // Jitter
    // -------------------------------------------------------------------------

    #[test]
    fn test_jitter_range() {
        for y in (0..BASE_HEIGHT).step_by(TILE_SIZE as usize) {
            for x in (0..BASE_WIDTH).step_by(TILE_SIZE as usize) {
                let j = tile_jitter(x, y);
                assert!((-6..=5).contains(&j), "jitter {j} out of range at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_jitter_known_values() {
        // (0 ^ 0) % 12 - 6
        assert_eq!(tile_jitter(0, 0), -6);
        // (248 ^ 0) % 12 - 6 = 8 - 6
        assert_eq!(tile_jitter(8, 0), 2);
        // (248 ^ 136) = 112, 112 % 12 = 4
        assert_eq!(tile_jitter(8, 8), -2);
    }

    // -------------------------------------------------------------------------
    // Gradient
    // -------------------------------------------------------------------------

    #[test]
    fn test_top_left_tile_color() {
        // t = 0, jitter = -6
        assert_eq!(tile_color(0, 0), Rgb888::new(6, 24, 34));
    }

    #[test]
    fn test_gradient_brightens_downward() {
        // Same column, jitter-free comparison through the green channel,
        // which has the widest span.
        let top = tile_color(0, 0).g() as i32 - tile_jitter(0, 0);
        let bottom = tile_color(0, 176).g() as i32 - tile_jitter(0, 176);
        assert!(bottom > top + 90, "gradient should brighten: top {top}, bottom {bottom}");
    }

    // -------------------------------------------------------------------------
    // Full background
    // -------------------------------------------------------------------------

    #[test]
    fn test_background_is_deterministic() {
        let mut a = base_canvas();
        let mut b = base_canvas();
        draw_pixel_background(&mut a).ok();
        draw_pixel_background(&mut b).ok();
        assert_eq!(a, b, "two renders on fresh canvases must be pixel-identical");
    }

    #[test]
    fn test_tiles_are_uniform() {
        let mut canvas = base_canvas();
        draw_pixel_background(&mut canvas).ok();
        // Tile at (16, 96) is far from the sun
        let expected = tile_color(16, 96);
        for dy in 0..TILE_SIZE as i32 {
            for dx in 0..TILE_SIZE as i32 {
                assert_eq!(canvas.pixel(Point::new(16 + dx, 96 + dy)), Some(expected));
            }
        }
    }

    #[test]
    fn test_sun_layers() {
        let mut canvas = base_canvas();
        draw_pixel_background(&mut canvas).ok();

        let center = Point::new(SUN_CENTER_X, SUN_CENTER_Y);
        assert_eq!(canvas.pixel(center), Some(SUN_INNER), "core is bright");
        assert_eq!(canvas.pixel(center + Point::new(12, 0)), Some(SUN_OUTER), "halo is dim");
        assert_ne!(canvas.pixel(center + Point::new(15, 0)), Some(SUN_OUTER), "outside the halo");
        // (10, 10) has 200 > 196, outside the outer disc
        assert_ne!(canvas.pixel(center + Point::new(10, 10)), Some(SUN_OUTER));
    }
}
