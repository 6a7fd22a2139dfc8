//! Owned pixel buffers used for low-resolution composition.
//!
//! - [`Canvas`]: opaque RGB surface the title screen composes each frame into.
//!   Supports alpha-blended rectangles (the vignette), fractional-scale sprite
//!   blits (the pulsing subtitle) and integer nearest-neighbor upscaling into
//!   any display [`DrawTarget`].
//! - [`Sprite`]: transparent surface; pixels never drawn stay `None`, so text
//!   rendered into a sprite can be scaled without a background box.
//!
//! Both implement [`DrawTarget`] with `Error = Infallible`, so every
//! embedded-graphics primitive and text style can draw into them directly.
//! Out-of-bounds pixels are ignored.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Map a point to a row-major buffer index, or `None` if outside `size`.
#[inline]
fn index_of(
    size: Size,
    point: Point,
) -> Option<usize> {
    let (x, y) = (u32::try_from(point.x).ok()?, u32::try_from(point.y).ok()?);
    (x < size.width && y < size.height).then(|| (y * size.width + x) as usize)
}

/// Blend one channel: `src * alpha + dst * (1 - alpha)` with alpha in 0..=255.
#[inline]
const fn blend_channel(
    src: u8,
    dst: u8,
    alpha: u8,
) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a)) / 255) as u8
}

/// Alpha-composite `src` over `dst`.
#[inline]
pub fn blend(
    src: Rgb888,
    dst: Rgb888,
    alpha: u8,
) -> Rgb888 {
    Rgb888::new(
        blend_channel(src.r(), dst.r(), alpha),
        blend_channel(src.g(), dst.g(), alpha),
        blend_channel(src.b(), dst.b(), alpha),
    )
}

// =============================================================================
// Canvas
// =============================================================================

/// Opaque RGB pixel buffer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    /// Create a black canvas of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb888::BLACK; (size.width * size.height) as usize],
        }
    }

    /// Color at `point`, or `None` if outside the canvas.
    #[cfg(test)]
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb888> {
        index_of(self.size, point).map(|i| self.pixels[i])
    }

    /// Set one pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_pixel(
        &mut self,
        point: Point,
        color: Rgb888,
    ) {
        if let Some(i) = index_of(self.size, point) {
            self.pixels[i] = color;
        }
    }

    /// Composite `color` at opacity `alpha` (0..=255) over every pixel in `area`.
    ///
    /// The area is clipped to the canvas first.
    pub fn blend_rect(
        &mut self,
        area: &Rectangle,
        color: Rgb888,
        alpha: u8,
    ) {
        let clipped = area.intersection(&self.bounding_box());
        for point in clipped.points() {
            if let Some(i) = index_of(self.size, point) {
                self.pixels[i] = blend(color, self.pixels[i], alpha);
            }
        }
    }

    /// Draw `sprite` with its top-left corner at `top_left`, scaled by `scale`
    /// using nearest-neighbor sampling. Transparent sprite pixels are skipped.
    pub fn blit_scaled(
        &mut self,
        sprite: &Sprite,
        top_left: Point,
        scale: f32,
    ) {
        if scale <= 0.0 {
            return;
        }
        let scaled = sprite.scaled_size(scale);
        let src = sprite.size();
        for dy in 0..scaled.height {
            let sy = ((dy as f32 / scale) as u32).min(src.height.saturating_sub(1));
            for dx in 0..scaled.width {
                let sx = ((dx as f32 / scale) as u32).min(src.width.saturating_sub(1));
                if let Some(color) = sprite.pixel(Point::new(sx as i32, sy as i32)) {
                    self.set_pixel(top_left + Point::new(dx as i32, dy as i32), color);
                }
            }
        }
    }

    /// Upscale the canvas by an integer `factor` (nearest neighbor) and draw it
    /// onto `target` at the origin.
    ///
    /// Each canvas pixel becomes a `factor`×`factor` block on the target.
    pub fn upscale_into<D>(
        &self,
        target: &mut D,
        factor: u32,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if factor == 0 {
            return Ok(());
        }
        let scaled = Size::new(self.size.width * factor, self.size.height * factor);
        let width = self.size.width as usize;
        let step = factor as usize;
        let colors = (0..scaled.height as usize).flat_map(move |y| {
            let row = &self.pixels[(y / step) * width..(y / step + 1) * width];
            (0..scaled.width as usize).map(move |x| row[x / step])
        });
        target.fill_contiguous(&Rectangle::new(Point::zero(), scaled), colors)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

// =============================================================================
// Sprite
// =============================================================================

/// Transparent RGB pixel buffer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sprite {
    size: Size,
    pixels: Vec<Option<Rgb888>>,
}

impl Sprite {
    /// Create a fully transparent sprite.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; (size.width * size.height) as usize],
        }
    }

    /// Color at `point`, or `None` if transparent or out of bounds.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb888> {
        index_of(self.size, point).and_then(|i| self.pixels[i])
    }

    /// Size of the sprite after scaling by `scale` (rounded to whole pixels).
    pub fn scaled_size(
        &self,
        scale: f32,
    ) -> Size {
        Size::new(
            (self.size.width as f32 * scale).round() as u32,
            (self.size.height as f32 * scale).round() as u32,
        )
    }
}

impl OriginDimensions for Sprite {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Sprite {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = index_of(self.size, point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}
