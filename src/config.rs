//! Application configuration constants.
//!
//! Everything is rendered at a small base resolution and upscaled by an
//! integer factor, which gives the blocky pixel-art look. Layout positions
//! below are expressed in base-resolution pixels.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Width of the low-resolution surface in pixels.
pub const BASE_WIDTH: u32 = 320;

/// Height of the low-resolution surface in pixels.
pub const BASE_HEIGHT: u32 = 180;

/// Integer upscale factor from the low-resolution surface to the window.
pub const SCALE: u32 = 3;

/// Window width in pixels (960).
pub const SCREEN_WIDTH: u32 = BASE_WIDTH * SCALE;

/// Window height in pixels (540).
pub const SCREEN_HEIGHT: u32 = BASE_HEIGHT * SCALE;

/// Window caption.
pub const WINDOW_TITLE: &str = "Tela Inicial - Jogo RPG";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Frame-rate cap.
pub const FPS: u32 = 60;

/// Target frame time at [`FPS`]. The frame clock sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

/// How long the loading message stays up before the process exits.
pub const START_DELAY_MS: u32 = 1500;

/// Upper bound on input events handled per frame. Extra events are dropped.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

// =============================================================================
// Background Configuration
// =============================================================================

/// Side length of a background gradient tile.
pub const TILE_SIZE: u32 = 8;

/// Sun center X (48 px in from the right edge).
pub const SUN_CENTER_X: i32 = BASE_WIDTH as i32 - 48;

/// Sun center Y.
pub const SUN_CENTER_Y: i32 = 32;

/// Radius of the outer (dim) sun disc.
pub const SUN_OUTER_RADIUS: i32 = 14;

/// Radius of the inner (bright) sun disc.
pub const SUN_INNER_RADIUS: i32 = 10;

// =============================================================================
// Title Screen Layout
// =============================================================================

/// Number of stacked vignette layers.
pub const VIGNETTE_LAYERS: u32 = 6;

/// Top edge of the title text.
pub const TITLE_Y: i32 = 18;

/// Top edge of the (unscaled) subtitle text.
pub const SUBTITLE_Y: i32 = 56;

/// Top edge of the first menu option.
pub const MENU_START_Y: i32 = 96;

/// Vertical distance between menu options.
pub const MENU_LINE_HEIGHT: i32 = 22;

/// Horizontal padding of the selection frame around the option text.
pub const MENU_PAD_X: i32 = 6;

/// Vertical padding of the selection frame around the option text.
pub const MENU_PAD_Y: i32 = 2;

/// Horizontal center of the low-resolution surface.
pub const CENTER_X: i32 = (BASE_WIDTH / 2) as i32;

/// Top edge of the loading message.
pub const LOADING_Y: i32 = (BASE_HEIGHT / 2) as i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_is_integer_multiple_of_base() {
        assert_eq!(SCREEN_WIDTH, 960);
        assert_eq!(SCREEN_HEIGHT, 540);
        assert_eq!(SCREEN_WIDTH % BASE_WIDTH, 0);
        assert_eq!(SCREEN_HEIGHT % BASE_HEIGHT, 0);
    }

    #[test]
    fn test_frame_time_matches_fps() {
        let millis = FRAME_TIME.as_secs_f64() * 1000.0;
        assert!((millis - 16.666).abs() < 0.01, "FRAME_TIME was {millis} ms");
    }

    #[test]
    fn test_sun_fits_on_surface() {
        assert!(SUN_CENTER_X + SUN_OUTER_RADIUS < BASE_WIDTH as i32);
        assert!(SUN_CENTER_Y - SUN_OUTER_RADIUS >= 0);
    }
}
