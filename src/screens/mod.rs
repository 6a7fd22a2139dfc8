//! Screens of the title sequence.
//!
//! 1. **Title** ([`title`]): background, vignette, title, pulsing subtitle
//!    and the Iniciar / Sair menu
//! 2. **Loading** ([`loading`]): placeholder shown for the start countdown
//!
//! Both compose on the same low-resolution canvas, owned by [`TitleScreen`].

mod loading;
mod title;

pub use loading::draw_loading_screen;
pub use title::TitleScreen;
