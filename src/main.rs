mod app;
mod assets;
mod game;

use anyhow::Context;

use crate::assets::{PLAYER_ATLAS_PATH, PlayerAtlas};
use crate::game::{GameConfig, GameState, rng_from_env};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dino Run starting...");

    let atlas = PlayerAtlas::load(PLAYER_ATLAS_PATH).context("failed to load the player sprite")?;
    let state = GameState::new(GameConfig::default(), rng_from_env()?);

    app::run(state, atlas);
    Ok(())
}
