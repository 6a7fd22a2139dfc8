//! Title screen: background, vignette, title, pulsing subtitle and menu.
//!
//! # Visual Layout (320x180 base resolution)
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │                                 (sun)  │
//! │               Jogo RPG                 │  y = 18
//! │                                        │
//! │     Um jogo em pixel - press Enter     │  y = 56, pulsing
//! │                                        │
//! │              ┌─────────┐               │
//! │              │ Iniciar │               │  y = 96, selected
//! │              └─────────┘               │
//! │                 Sair                   │  y = 118
//! └────────────────────────────────────────┘
//! ```
//!
//! The frame is composed on the owned low-resolution [`Canvas`] and upscaled
//! by [`SCALE`] onto the display with nearest-neighbor sampling.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use log::debug;

use crate::animations::{subtitle_pulse, vignette_layers};
use crate::background::draw_pixel_background;
use crate::colors::{BLACK, MENU_HIGHLIGHT_BORDER, MENU_HIGHLIGHT_FILL};
use crate::config::{
    BASE_HEIGHT,
    BASE_WIDTH,
    CENTER_X,
    MENU_LINE_HEIGHT,
    MENU_PAD_X,
    MENU_PAD_Y,
    MENU_START_Y,
    SCALE,
    SUBTITLE_Y,
    TITLE_Y,
};
use crate::menu::{Menu, MenuInput, MenuOption, MenuResponse};
use crate::styles::{MENU_STYLE, MENU_STYLE_SELECTED, SUBTITLE_STYLE, TITLE_STYLE, TOP_LEFT};
use crate::surface::{Canvas, Sprite};

/// Title text.
const TITLE_TEXT: &str = "Jogo RPG";

/// Subtitle text (pulses).
const SUBTITLE_TEXT: &str = "Um jogo em pixel - press Enter";

/// Fill + 1 px accent border behind the selected option.
const HIGHLIGHT_STYLE: PrimitiveStyle<Rgb888> = PrimitiveStyleBuilder::new()
    .fill_color(MENU_HIGHLIGHT_FILL)
    .stroke_color(MENU_HIGHLIGHT_BORDER)
    .stroke_width(1)
    .build();

/// Text anchored at its top-left corner.
fn top_left_text<'a>(
    text: &'a str,
    position: Point,
    style: MonoTextStyle<'static, Rgb888>,
) -> Text<'a, MonoTextStyle<'static, Rgb888>> {
    Text::with_text_style(text, position, style, TOP_LEFT)
}

/// X coordinate that horizontally centers something `width` pixels wide.
#[inline]
const fn centered_x(width: u32) -> i32 {
    CENTER_X - (width / 2) as i32
}

/// Text whose top edge is at `y`, horizontally centered on the surface.
fn centered_text<'a>(
    text: &'a str,
    y: i32,
    style: MonoTextStyle<'static, Rgb888>,
) -> Text<'a, MonoTextStyle<'static, Rgb888>> {
    let width = top_left_text(text, Point::zero(), style).bounding_box().size.width;
    top_left_text(text, Point::new(centered_x(width), y), style)
}

/// Render `text` into a tightly sized transparent sprite.
fn text_sprite(
    text: &str,
    style: MonoTextStyle<'static, Rgb888>,
) -> Sprite {
    let bounds = top_left_text(text, Point::zero(), style).bounding_box();
    let mut sprite = Sprite::new(bounds.size);
    top_left_text(text, Point::zero() - bounds.top_left, style)
        .draw(&mut sprite)
        .ok();
    sprite
}

/// Area of the selection frame around a menu option's text.
fn highlight_area(text_bounds: Rectangle) -> Rectangle {
    Rectangle::new(
        text_bounds.top_left - Point::new(MENU_PAD_X, MENU_PAD_Y),
        text_bounds.size + Size::new(2 * MENU_PAD_X as u32, 2 * MENU_PAD_Y as u32),
    )
}

/// Title screen controller.
///
/// Owns the low-resolution canvas, the menu cursor and the animation clock.
pub struct TitleScreen {
    canvas: Canvas,
    menu: Menu,
    elapsed_ms: u64,
    subtitle: Sprite,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(Size::new(BASE_WIDTH, BASE_HEIGHT)),
            menu: Menu::new(),
            elapsed_ms: 0,
            subtitle: text_sprite(SUBTITLE_TEXT, SUBTITLE_STYLE),
        }
    }

    /// Menu cursor.
    #[inline]
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Accumulated animation time.
    #[inline]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Low-resolution canvas, for screens that reuse it (the loading screen).
    #[inline]
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Apply a navigation input.
    pub fn handle_input(
        &mut self,
        input: MenuInput,
    ) -> MenuResponse {
        let response = self.menu.handle_input(input);
        if response == MenuResponse::Idle {
            debug!("Menu cursor: {}", self.menu.selected().label());
        }
        response
    }

    /// Advance the animation clock.
    #[inline]
    pub const fn update(
        &mut self,
        delta_ms: u32,
    ) {
        self.elapsed_ms = self.elapsed_ms.wrapping_add(delta_ms as u64);
    }

    /// Compose a full frame and upscale it onto `display`.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.compose();
        self.present(display)
    }

    /// Upscale the current canvas contents onto `display`.
    pub fn present<D>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.canvas.upscale_into(display, SCALE)
    }

    /// Draw every layer of the title frame into the canvas.
    fn compose(&mut self) {
        let canvas = &mut self.canvas;

        // Background tiles + sun
        draw_pixel_background(canvas).ok();

        // Vignette
        for layer in vignette_layers(canvas.size()) {
            canvas.blend_rect(&layer.area, BLACK, layer.alpha);
        }

        // Title
        centered_text(TITLE_TEXT, TITLE_Y, TITLE_STYLE).draw(canvas).ok();

        // Subtitle, scaled around its horizontal center
        let pulse = subtitle_pulse(self.elapsed_ms);
        let scaled = self.subtitle.scaled_size(pulse);
        canvas.blit_scaled(&self.subtitle, Point::new(centered_x(scaled.width), SUBTITLE_Y), pulse);

        // Menu
        for (i, option) in MenuOption::ALL.iter().enumerate() {
            let y = MENU_START_Y + i as i32 * MENU_LINE_HEIGHT;
            let is_selected = i == self.menu.selected_index();
            let style = if is_selected { MENU_STYLE_SELECTED } else { MENU_STYLE };
            let text = centered_text(option.label(), y, style);

            if is_selected {
                highlight_area(text.bounding_box())
                    .into_styled(HIGHLIGHT_STYLE)
                    .draw(canvas)
                    .ok();
            }
            text.draw(canvas).ok();
        }
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{MENU_TEXT_SELECTED, TITLE_TEXT as TITLE_COLOR};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn screen() -> Canvas {
        Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    /// Bounding box of the option at `index` as drawn on the base canvas.
    fn option_bounds(index: usize) -> Rectangle {
        let y = MENU_START_Y + index as i32 * MENU_LINE_HEIGHT;
        centered_text(MenuOption::ALL[index].label(), y, MENU_STYLE).bounding_box()
    }

    fn contains_color(
        canvas: &Canvas,
        area: Rectangle,
        color: Rgb888,
    ) -> bool {
        area.points().any(|p| canvas.pixel(p) == Some(color))
    }

    // -------------------------------------------------------------------------
    // Input and clock
    // -------------------------------------------------------------------------

    #[test]
    fn test_handle_input_forwards_to_menu() {
        let mut title = TitleScreen::new();
        assert_eq!(title.handle_input(MenuInput::MoveDown), MenuResponse::Idle);
        assert_eq!(title.menu().selected_index(), 1);
        assert_eq!(title.handle_input(MenuInput::Confirm), MenuResponse::Selected(MenuOption::Quit));
    }

    #[test]
    fn test_update_accumulates() {
        let mut title = TitleScreen::new();
        title.update(16);
        title.update(17);
        assert_eq!(title.elapsed_ms(), 33);
    }

    #[test]
    fn test_update_wraps_at_overflow() {
        let mut title = TitleScreen::new();
        title.elapsed_ms = u64::MAX;
        title.update(2);
        assert_eq!(title.elapsed_ms(), 1);
    }

    // -------------------------------------------------------------------------
    // Layout helpers
    // -------------------------------------------------------------------------

    #[test]
    fn test_centered_text_is_centered() {
        let bounds = centered_text(TITLE_TEXT, TITLE_Y, TITLE_STYLE).bounding_box();
        let left = bounds.top_left.x;
        let right = BASE_WIDTH as i32 - (left + bounds.size.width as i32);
        assert!((left - right).abs() <= 1, "left margin {left}, right margin {right}");
        assert_eq!(bounds.top_left.y, TITLE_Y);
    }

    #[test]
    fn test_highlight_pads_text() {
        let text = Rectangle::new(Point::new(100, 96), Size::new(63, 15));
        let area = highlight_area(text);
        assert_eq!(area.top_left, Point::new(94, 94));
        assert_eq!(area.size, Size::new(75, 19));
    }

    #[test]
    fn test_subtitle_sprite_matches_text_size() {
        let expected = top_left_text(SUBTITLE_TEXT, Point::zero(), SUBTITLE_STYLE).bounding_box().size;
        assert_eq!(TitleScreen::new().subtitle.size(), expected);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_is_deterministic() {
        let mut a = TitleScreen::new();
        let mut b = TitleScreen::new();
        a.update(1234);
        b.update(1234);

        let (mut screen_a, mut screen_b) = (screen(), screen());
        a.render(&mut screen_a).ok();
        b.render(&mut screen_b).ok();
        assert_eq!(screen_a, screen_b);
    }

    #[test]
    fn test_render_upscales_canvas() {
        let mut title = TitleScreen::new();
        let mut display = screen();
        title.render(&mut display).ok();

        for &(x, y) in &[(0, 0), (17, 42), (160, 100), (319, 179)] {
            let src = title.canvas.pixel(Point::new(x, y));
            for (dx, dy) in [(0, 0), (2, 2)] {
                let dst = Point::new(x * SCALE as i32 + dx, y * SCALE as i32 + dy);
                assert_eq!(display.pixel(dst), src, "block for ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_vignette_darkens_background() {
        let mut title = TitleScreen::new();
        title.compose();

        let mut plain = Canvas::new(Size::new(BASE_WIDTH, BASE_HEIGHT));
        draw_pixel_background(&mut plain).ok();

        // (4, 170) sits under the first three vignette layers, away from any text
        let point = Point::new(4, 170);
        let (Some(dark), Some(bright)) = (title.canvas.pixel(point), plain.pixel(point)) else {
            panic!("point must be on the canvas");
        };
        assert!(dark.g() < bright.g(), "vignette should darken: {dark:?} vs {bright:?}");
    }

    #[test]
    fn test_title_text_drawn() {
        let mut title = TitleScreen::new();
        title.compose();
        let bounds = centered_text(TITLE_TEXT, TITLE_Y, TITLE_STYLE).bounding_box();
        assert!(contains_color(&title.canvas, bounds, TITLE_COLOR));
    }

    #[test]
    fn test_selected_option_highlighted() {
        let mut title = TitleScreen::new();
        title.compose();

        let first = highlight_area(option_bounds(0));
        let second = highlight_area(option_bounds(1));

        // Selected: border pixel and selected text color present
        assert_eq!(title.canvas.pixel(first.top_left), Some(MENU_HIGHLIGHT_BORDER));
        assert!(contains_color(&title.canvas, option_bounds(0), MENU_TEXT_SELECTED));
        // Unselected: no frame
        assert_ne!(title.canvas.pixel(second.top_left), Some(MENU_HIGHLIGHT_BORDER));

        title.handle_input(MenuInput::MoveDown);
        title.compose();
        assert_eq!(title.canvas.pixel(second.top_left), Some(MENU_HIGHLIGHT_BORDER));
        assert_ne!(title.canvas.pixel(first.top_left), Some(MENU_HIGHLIGHT_BORDER));
    }

    #[test]
    fn test_subtitle_size_follows_pulse() {
        // Trough (~1.0) and peak (~1.1) produce different subtitle footprints
        let mut title = TitleScreen::new();
        let base = title.subtitle.size();
        title.update(471);
        assert_eq!(title.subtitle.scaled_size(subtitle_pulse(title.elapsed_ms())), base);
        title.update(628 - 471 + 157);
        assert!(title.subtitle.scaled_size(subtitle_pulse(title.elapsed_ms())).width > base.width);
    }
}
