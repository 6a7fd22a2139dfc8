//! Title menu model.
//!
//! The menu is a fixed, ordered list of [`MenuOption`]s with a wrapping
//! selection cursor. Input arrives as [`MenuInput`] and every input produces a
//! [`MenuResponse`]: either nothing happened that the caller must act on
//! ([`MenuResponse::Idle`]) or an option was confirmed
//! ([`MenuResponse::Selected`]).

/// Entries of the title menu, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuOption {
    /// "Iniciar": show the loading screen, then exit.
    Start,
    /// "Sair": exit immediately.
    Quit,
}

impl MenuOption {
    /// All options in display order.
    pub const ALL: [Self; 2] = [Self::Start, Self::Quit];

    /// Number of menu options.
    pub const COUNT: usize = Self::ALL.len();

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Iniciar",
            Self::Quit => "Sair",
        }
    }
}

/// Navigation input understood by the menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuInput {
    MoveUp,
    MoveDown,
    Confirm,
}

/// Outcome of feeding one input to the menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuResponse {
    /// Nothing to act on (cursor moved or input ignored).
    Idle,
    /// The highlighted option was confirmed.
    Selected(MenuOption),
}

/// Wrapping selection cursor over [`MenuOption::ALL`].
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Index of the highlighted option, always in `0..MenuOption::COUNT`.
    #[inline]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The highlighted option.
    #[inline]
    pub const fn selected(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    /// Apply one input.
    pub fn handle_input(
        &mut self,
        input: MenuInput,
    ) -> MenuResponse {
        match input {
            MenuInput::MoveUp => {
                self.selected = (self.selected + MenuOption::COUNT - 1) % MenuOption::COUNT;
                MenuResponse::Idle
            }
            MenuInput::MoveDown => {
                self.selected = (self.selected + 1) % MenuOption::COUNT;
                MenuResponse::Idle
            }
            MenuInput::Confirm => MenuResponse::Selected(self.selected()),
        }
    }
}
