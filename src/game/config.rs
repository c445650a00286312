//! file: config.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:12:41 Saturday
//! brief: tuning constants and the runtime game configuration

use std::time::Duration;

use anyhow::{Context, bail};
use rand::{SeedableRng, rngs::StdRng};

/// Environment variable holding an optional obstacle RNG seed.
pub const SEED_ENV: &str = "DINO_RUN_SEED";

/// Game tuning parameters.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 300.0;
    pub const FRAME_MICROS: u64 = 16_667;

    // Player
    pub const GROUND_Y: f32 = 200.0;
    pub const PLAYER_START_X: f32 = 60.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const JUMP_SPEED: f32 = 450.0;
    pub const GRAVITY: f32 = 900.0;

    // Obstacles
    pub const MAX_OBSTACLES: usize = 500;
    pub const SCROLL_SPEED: f32 = 8.0;
    pub const FIRST_OBSTACLE_X: f32 = 700.0;
    pub const OBSTACLE_MIN_SPACING: f32 = 600.0;
    pub const OBSTACLE_MAX_SPACING: f32 = 800.0;
    pub const OBSTACLE_Y: f32 = 210.0;
    pub const OBSTACLE_HEIGHT: f32 = 50.0;
    pub const OBSTACLE_MIN_WIDTH: f32 = 50.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 100.0;
    pub const OBSTACLE_WIDTH_STEP: f32 = 10.0;

    // Timing
    pub const SCORE_INTERVAL: f32 = 0.1;
    pub const MAX_FRAME_DT: f32 = 0.1;
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub frame_duration: Duration,
    pub ground_y: f32,
    pub player_start_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub max_obstacles: usize,
    pub scroll_speed: f32,
    pub first_obstacle_x: f32,
    pub obstacle_min_spacing: f32,
    pub obstacle_max_spacing: f32,
    pub obstacle_y: f32,
    pub obstacle_height: f32,
    pub obstacle_min_width: f32,
    pub obstacle_max_width: f32,
    pub obstacle_width_step: f32,
    pub score_interval: f32,
    pub max_frame_dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            frame_duration: Duration::from_micros(Params::FRAME_MICROS),
            ground_y: Params::GROUND_Y,
            player_start_x: Params::PLAYER_START_X,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            jump_speed: Params::JUMP_SPEED,
            gravity: Params::GRAVITY,
            max_obstacles: Params::MAX_OBSTACLES,
            scroll_speed: Params::SCROLL_SPEED,
            first_obstacle_x: Params::FIRST_OBSTACLE_X,
            obstacle_min_spacing: Params::OBSTACLE_MIN_SPACING,
            obstacle_max_spacing: Params::OBSTACLE_MAX_SPACING,
            obstacle_y: Params::OBSTACLE_Y,
            obstacle_height: Params::OBSTACLE_HEIGHT,
            obstacle_min_width: Params::OBSTACLE_MIN_WIDTH,
            obstacle_max_width: Params::OBSTACLE_MAX_WIDTH,
            obstacle_width_step: Params::OBSTACLE_WIDTH_STEP,
            score_interval: Params::SCORE_INTERVAL,
            max_frame_dt: Params::MAX_FRAME_DT,
        }
    }
}

/// Builds the obstacle RNG, seeded from `DINO_RUN_SEED` when it is set.
pub fn rng_from_env() -> anyhow::Result<StdRng> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => {
            let seed = parse_seed(&raw)?;
            log::info!("Seeding obstacles from {SEED_ENV}={seed}");
            Ok(StdRng::seed_from_u64(seed))
        }
        Err(std::env::VarError::NotPresent) => Ok(StdRng::from_entropy()),
        Err(std::env::VarError::NotUnicode(_)) => bail!("{SEED_ENV} is not valid unicode"),
    }
}

fn parse_seed(raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got {raw:?}"))
}
