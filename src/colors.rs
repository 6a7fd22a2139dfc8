//! Color constants for the title menu.
//!
//! The low-resolution surface is full 24-bit RGB ([`Rgb888`]) so the gradient,
//! jitter and vignette blending keep their precision before upscaling.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Pure black. Vignette layers are black at varying opacity.
pub const BLACK: Rgb888 = Rgb888::BLACK;

// =============================================================================
// Sun
// =============================================================================

/// Outer sun disc (dim halo).
pub const SUN_OUTER: Rgb888 = Rgb888::new(255, 210, 60);

/// Inner sun disc (bright core).
pub const SUN_INNER: Rgb888 = Rgb888::new(255, 240, 120);

// =============================================================================
// Text
// =============================================================================

/// Warm off-white for the title.
pub const TITLE_TEXT: Rgb888 = Rgb888::new(255, 245, 200);

/// Light gray for the subtitle.
pub const SUBTITLE_TEXT: Rgb888 = Rgb888::new(220, 220, 220);

/// Unselected menu option.
pub const MENU_TEXT: Rgb888 = Rgb888::new(230, 230, 230);

/// Selected menu option.
pub const MENU_TEXT_SELECTED: Rgb888 = Rgb888::new(255, 255, 200);

/// Fill behind the selected menu option.
pub const MENU_HIGHLIGHT_FILL: Rgb888 = Rgb888::new(30, 30, 40);

/// 1 px accent border around the selected menu option.
pub const MENU_HIGHLIGHT_BORDER: Rgb888 = Rgb888::new(80, 160, 200);

// =============================================================================
// Loading Screen
// =============================================================================

/// Near-black loading background.
pub const LOADING_BACKGROUND: Rgb888 = Rgb888::new(10, 10, 12);

/// Loading message text.
pub const LOADING_TEXT: Rgb888 = Rgb888::new(240, 240, 240);
