//! Animation and overlay math for the title screen.
//!
//! - **Subtitle pulse**: the subtitle gently grows and shrinks. The scale is a
//!   sine of the animation clock:
//!   ```text
//!   scale = 1 + 0.05 · (1 + sin(elapsed_ms · 0.01))      ∈ [1.0, 1.1]
//!   ```
//!   One full cycle takes 2π / 0.01 ≈ 628 ms.
//! - **Vignette**: six stacked black rectangles, each inset 2 px further than
//!   the previous and slightly more opaque, composited over the frame.
//!
//! Both are pure functions of their inputs so frames are reproducible.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::VIGNETTE_LAYERS;

// =============================================================================
// Subtitle Pulse
// =============================================================================

/// Pulse amplitude. The scale swings between 1.0 and `1 + 2 * PULSE_AMPLITUDE`.
const PULSE_AMPLITUDE: f32 = 0.05;

/// Angular speed of the pulse in radians per millisecond.
const PULSE_SPEED: f32 = 0.01;

/// Subtitle scale factor for the given animation clock.
#[inline]
pub fn subtitle_pulse(elapsed_ms: u64) -> f32 {
    // Reduce the phase in f64 first so long sessions keep their precision
    let phase = (elapsed_ms as f64 * f64::from(PULSE_SPEED)) % std::f64::consts::TAU;
    PULSE_AMPLITUDE.mul_add(1.0 + (phase as f32).sin(), 1.0)
}

// =============================================================================
// Vignette
// =============================================================================

/// Inset step between consecutive vignette layers.
const VIGNETTE_STEP: u32 = 2;

/// Opacity of the first (outermost) layer.
const VIGNETTE_BASE_ALPHA: u8 = 10;

/// Opacity added per layer.
const VIGNETTE_ALPHA_STEP: u8 = 6;

/// One layer of the vignette overlay.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VignetteLayer {
    /// Area covered by the layer.
    pub area: Rectangle,
    /// Black opacity, 0..=255.
    pub alpha: u8,
}

/// Geometry and opacity of vignette layer `index` on a surface of `size`.
///
/// Layer `i` covers `(2i, 2i, W - 4i, H - 4i)` at alpha `10 + 6i`.
pub const fn vignette_layer(
    size: Size,
    index: u32,
) -> VignetteLayer {
    let inset = index * VIGNETTE_STEP;
    VignetteLayer {
        area: Rectangle::new(
            Point::new(inset as i32, inset as i32),
            Size::new(
                size.width.saturating_sub(inset * 2),
                size.height.saturating_sub(inset * 2),
            ),
        ),
        alpha: VIGNETTE_BASE_ALPHA + VIGNETTE_ALPHA_STEP * index as u8,
    }
}

/// All vignette layers for a surface of `size`, outermost first.
pub fn vignette_layers(size: Size) -> impl Iterator<Item = VignetteLayer> {
    (0..VIGNETTE_LAYERS).map(move |i| vignette_layer(size, i))
}
