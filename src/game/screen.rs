//! file: screen.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:24:37 Saturday
//! brief: top-level screens and the title menu options

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Title,
    Gameplay,
    Ending,
    Credits,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Title => "title",
            Screen::Gameplay => "gameplay",
            Screen::Ending => "ending",
            Screen::Credits => "credits",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOption {
    StartGame,
    Credits,
    ExitGame,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [
        MenuOption::StartGame,
        MenuOption::Credits,
        MenuOption::ExitGame,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::StartGame => "Start game",
            MenuOption::Credits => "Credits",
            MenuOption::ExitGame => "Exit game",
        }
    }
}
