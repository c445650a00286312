//! file: obstacle.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:02:18 Saturday
//! brief: obstacle pool generation

use rand::Rng;

use super::{GameConfig, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Ground,
    #[allow(dead_code)]
    Air,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    pub fn ground(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind: ObstacleKind::Ground,
            rect: Rect::new(x, y, width, height),
        }
    }
}

/// Lays out `max_obstacles` ground obstacles left to right. Each one sits a
/// random spacing past the previous, and widths are random multiples of
/// `obstacle_width_step`.
pub fn generate_obstacles<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Vec<Obstacle> {
    let mut obstacles = Vec::with_capacity(config.max_obstacles);
    let mut x = config.first_obstacle_x;

    let min_steps = (config.obstacle_min_width / config.obstacle_width_step).round() as u32;
    let max_steps = (config.obstacle_max_width / config.obstacle_width_step)
        .round()
        .max(min_steps as f32) as u32;

    for slot in 0..config.max_obstacles {
        if slot > 0 {
            x += rng.gen_range(config.obstacle_min_spacing..=config.obstacle_max_spacing);
        }
        let width = rng.gen_range(min_steps..=max_steps) as f32 * config.obstacle_width_step;
        obstacles.push(Obstacle::ground(
            x,
            config.obstacle_y,
            width,
            config.obstacle_height,
        ));
    }

    obstacles
}
