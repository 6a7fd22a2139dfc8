//! Pre-computed static text styles.
//!
//! `MonoTextStyle::new` is a const fn in embedded-graphics 0.8, so every style
//! here is built at compile time and shared by reference. All text is
//! positioned by its top-left corner ([`Baseline::Top`]), which keeps the
//! layout constants in [`crate::config`] easy to reason about.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_7X13, FONT_9X15},
    },
    pixelcolor::Rgb888,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{LOADING_TEXT, MENU_TEXT, MENU_TEXT_SELECTED, SUBTITLE_TEXT, TITLE_TEXT};

/// Left-aligned, top-anchored text. Centering is done by measuring the text.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Large title font (`ProFont` 24pt).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_24_POINT, TITLE_TEXT);

/// Subtitle font before the pulse scale is applied.
pub const SUBTITLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_7X13, SUBTITLE_TEXT);

/// Unselected menu option.
pub const MENU_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_9X15, MENU_TEXT);

/// Selected menu option.
pub const MENU_STYLE_SELECTED: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_9X15, MENU_TEXT_SELECTED);

/// "Carregando..." message.
pub const LOADING_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_9X15, LOADING_TEXT);
