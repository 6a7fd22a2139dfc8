//! Window event translation.
//!
//! Simulator window events are reduced to the two things the application
//! cares about: the window was closed, or a menu key was pressed. Events are
//! collected once per frame into a fixed-capacity batch.
//!
//! Key mapping:
//!
//! | Key                      | Input                   |
//! |--------------------------|-------------------------|
//! | `Up`, `W`                | [`MenuInput::MoveUp`]   |
//! | `Down`, `S`              | [`MenuInput::MoveDown`] |
//! | `Return`, keypad `Enter` | [`MenuInput::Confirm`]  |
//!
//! OS key repeat is ignored so holding a key moves the cursor only once.

use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::sdl2::Keycode;
use heapless::Vec;
use log::warn;

use crate::config::MAX_EVENTS_PER_FRAME;
use crate::menu::MenuInput;

/// Application-level input event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    /// Window close request. Terminates from any state.
    Quit,
    /// Menu navigation key.
    Menu(MenuInput),
}

/// Events collected during one frame.
pub type InputBatch = Vec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Menu input bound to `keycode`, if any.
fn menu_input(keycode: Keycode) -> Option<MenuInput> {
    match keycode {
        Keycode::Up | Keycode::W => Some(MenuInput::MoveUp),
        Keycode::Down | Keycode::S => Some(MenuInput::MoveDown),
        Keycode::Return | Keycode::KpEnter => Some(MenuInput::Confirm),
        _ => None,
    }
}

/// Translate one simulator event. Returns `None` for events with no meaning here.
pub fn translate_event(event: SimulatorEvent) -> Option<InputEvent> {
    match event {
        SimulatorEvent::Quit => Some(InputEvent::Quit),
        SimulatorEvent::KeyDown { repeat: true, .. } => None,
        SimulatorEvent::KeyDown { keycode, .. } => menu_input(keycode).map(InputEvent::Menu),
        _ => None,
    }
}

/// Drain pending events into a batch, stopping once the batch is full.
///
/// The source is read lazily, so with `window.events()` anything past the
/// capacity stays queued in SDL and is picked up next frame.
pub fn collect_events<I>(events: I) -> InputBatch
where
    I: IntoIterator<Item = SimulatorEvent>,
{
    let mut batch = InputBatch::new();
    for event in events.into_iter().filter_map(translate_event).take(MAX_EVENTS_PER_FRAME) {
        // Capacity matches take(), push cannot fail
        batch.push(event).ok();
    }

    if batch.is_full() {
        warn!("Input backlog: handled {MAX_EVENTS_PER_FRAME} events this frame, rest deferred");
    }
    batch
}
