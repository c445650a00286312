//! file: player.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:40:52 Saturday
//! brief: the jumping player and its vertical physics

use super::{GameConfig, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Vertical speed in px/s, negative is upwards.
    pub speed: f32,
    pub can_jump: bool,
}

impl Player {
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.player_start_x,
                config.ground_y,
                config.player_width,
                config.player_height,
            ),
            speed: 0.0,
            can_jump: true,
        }
    }

    /// Applies the jump impulse if grounded. Returns whether the jump happened.
    pub fn try_jump(&mut self, jump_speed: f32) -> bool {
        if !self.can_jump {
            return false;
        }
        self.speed = -jump_speed;
        self.can_jump = false;
        true
    }

    pub fn integrate(&mut self, dt: f32, gravity: f32, ground_y: f32) {
        self.rect.y += self.speed * dt;
        self.speed += gravity * dt;

        if self.rect.y >= ground_y {
            self.rect.y = ground_y;
            self.speed = 0.0;
            self.can_jump = true;
        }
    }
}
