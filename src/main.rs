// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Pixel-art title menu.
//!
//! Renders a title screen at 320x180 and upscales it 3x into a 960x540
//! window:
//! - Procedural tiled gradient background with a pixel sun
//! - Layered vignette
//! - Title and a pulsing subtitle
//! - Two-option menu ("Iniciar" / "Sair")
//!
//! Choosing "Iniciar" shows a loading message for 1.5 s and exits. Choosing
//! "Sair" or closing the window exits immediately.
//!
//! # Controls
//!
//! | Key                 | Action        |
//! |---------------------|---------------|
//! | `Up` / `W`          | Previous option |
//! | `Down` / `S`        | Next option   |
//! | `Enter`             | Confirm       |
//!
//! # Logging
//!
//! Uses `env_logger`; the default level is `info`. Set `RUST_LOG=debug` to
//! also see menu cursor movement.

mod animations;
mod app;
mod background;
mod colors;
mod config;
mod input;
mod menu;
mod screens;
mod styles;
mod surface;
mod timing;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use env_logger::Env;
use log::info;

use app::App;
use config::{FPS, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use input::collect_events;
use timing::FrameClock;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // The application upscales itself, so the window shows display pixels 1:1
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(Rgb888::BLACK).ok();
    window.update(&display);
    info!("Window {SCREEN_WIDTH}x{SCREEN_HEIGHT} open, capped at {FPS} FPS");

    let mut app = App::new();
    let mut clock = FrameClock::new();

    while app.is_running() {
        let dt_ms = clock.tick();

        let events = collect_events(window.events());
        app.handle_events(&events);

        app.frame(dt_ms, &mut display).ok();
        window.update(&display);
    }

    let title = app.title();
    info!(
        "Shutting down after {} ms on the title screen (cursor on {})",
        title.elapsed_ms(),
        title.menu().selected().label()
    );
}
