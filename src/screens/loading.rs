//! Placeholder loading screen shown after "Iniciar" is chosen.
//!
//! A solid near-black frame with "Carregando..." centered horizontally and
//! its top edge at mid-height. It stays up for the start countdown and then
//! the application exits.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::LOADING_BACKGROUND;
use crate::config::{CENTER_X, LOADING_Y};
use crate::styles::{LOADING_STYLE, TOP_LEFT};

/// Loading message.
const LOADING_TEXT: &str = "Carregando...";

/// Draw the loading frame onto `target`.
pub fn draw_loading_screen<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    target.clear(LOADING_BACKGROUND)?;

    let width = Text::with_text_style(LOADING_TEXT, Point::zero(), LOADING_STYLE, TOP_LEFT)
        .bounding_box()
        .size
        .width;
    let position = Point::new(CENTER_X - (width / 2) as i32, LOADING_Y);
    Text::with_text_style(LOADING_TEXT, position, LOADING_STYLE, TOP_LEFT).draw(target)?;
    Ok(())
}
