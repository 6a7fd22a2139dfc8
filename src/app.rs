//! Top-level application state machine.
//!
//! ```text
//!            Iniciar                     countdown reaches 0
//!   Menu ───────────────▶ Starting ───────────────────────▶ Terminated
//!     │                                                        ▲
//!     └──────────── Sair / window close ───────────────────────┘
//! ```
//!
//! A window close request terminates from any state. [`App`] owns the state
//! and the [`TitleScreen`]; the binary only feeds it events and frame times.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use log::info;

use crate::config::START_DELAY_MS;
use crate::input::InputEvent;
use crate::menu::{MenuOption, MenuResponse};
use crate::screens::{TitleScreen, draw_loading_screen};

/// Application state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AppState {
    /// Title menu is interactive.
    #[default]
    Menu,
    /// Loading message is shown until the countdown runs out.
    Starting {
        /// Milliseconds left. Never negative.
        remaining_ms: u32,
    },
    /// Main loop should exit.
    Terminated,
}

impl AppState {
    /// State after a window close request.
    #[inline]
    pub const fn quit(self) -> Self {
        Self::Terminated
    }

    /// State after the menu confirmed `option`. Only meaningful from `Menu`.
    pub const fn select(
        self,
        option: MenuOption,
    ) -> Self {
        match (self, option) {
            (Self::Menu, MenuOption::Start) => Self::Starting {
                remaining_ms: START_DELAY_MS,
            },
            (Self::Menu, MenuOption::Quit) => Self::Terminated,
            (state, _) => state,
        }
    }

    /// Advance the countdown by one frame.
    pub const fn tick(
        self,
        dt_ms: u32,
    ) -> Self {
        match self {
            Self::Starting { remaining_ms } => match remaining_ms.saturating_sub(dt_ms) {
                0 => Self::Terminated,
                remaining_ms => Self::Starting { remaining_ms },
            },
            state => state,
        }
    }
}

/// The title application: state machine plus the title screen it drives.
pub struct App {
    state: AppState,
    title: TitleScreen,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Menu,
            title: TitleScreen::new(),
        }
    }

    /// Current state.
    #[cfg(test)]
    pub const fn state(&self) -> AppState {
        self.state
    }

    /// `false` once the application has terminated.
    #[inline]
    pub const fn is_running(&self) -> bool {
        !matches!(self.state, AppState::Terminated)
    }

    /// Title screen (menu cursor, animation clock).
    #[inline]
    pub const fn title(&self) -> &TitleScreen {
        &self.title
    }

    fn transition(
        &mut self,
        next: AppState,
    ) {
        if next != self.state {
            info!("State: {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Handle this frame's input events in order.
    ///
    /// Menu inputs are forwarded to the title screen only while in `Menu`.
    pub fn handle_events(
        &mut self,
        events: &[InputEvent],
    ) {
        for &event in events {
            match (event, self.state) {
                (InputEvent::Quit, _) => {
                    info!("Window close requested");
                    self.transition(self.state.quit());
                }
                (InputEvent::Menu(input), AppState::Menu) => {
                    if let MenuResponse::Selected(option) = self.title.handle_input(input) {
                        info!("Selected: {}", option.label());
                        self.transition(self.state.select(option));
                    }
                }
                (InputEvent::Menu(_), _) => {}
            }
        }
    }

    /// Update and draw one frame onto `display`.
    ///
    /// In `Menu` the title animation advances and the title frame is drawn. In
    /// `Starting` the loading frame is drawn and the countdown advances.
    pub fn frame<D>(
        &mut self,
        dt_ms: u32,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        match self.state {
            AppState::Menu => {
                self.title.update(dt_ms);
                self.title.render(display)
            }
            AppState::Starting { .. } => {
                draw_loading_screen(self.title.canvas_mut()).ok();
                let presented = self.title.present(display);
                self.transition(self.state.tick(dt_ms));
                presented
            }
            AppState::Terminated => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
