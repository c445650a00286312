//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:05:27 Saturday
//! brief: game logic, headless apart from the gpui view

mod config;
mod input;
mod obstacle;
mod player;
mod rect;
mod screen;
mod state;
mod view;

pub use config::{GameConfig, rng_from_env};
pub use input::FrameInput;
pub use obstacle::{Obstacle, ObstacleKind, generate_obstacles};
pub use player::Player;
pub use rect::Rect;
pub use screen::{MenuOption, Screen};
pub use state::GameState;
pub use view::DinoRun;

gpui::actions!(
    dino_run,
    [MoveUp, MoveDown, Jump, Confirm, RestartGame, QuitGame]
);
