//! file: input.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:31:15 Saturday
//! brief: key presses latched between two frames

/// Edge-triggered presses collected since the previous update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub confirm: bool,
    pub restart: bool,
}

impl FrameInput {
    /// Up doubles as jump during gameplay.
    pub fn wants_jump(&self) -> bool {
        self.jump || self.up
    }
}
