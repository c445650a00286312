//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief: window setup, key bindings and the frame loop

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, Timer, TitlebarOptions,
    WindowBounds, WindowOptions, px, size,
};

use crate::assets::PlayerAtlas;
use crate::game::{
    Confirm, DinoRun, GameState, Jump, MoveDown, MoveUp, QuitGame, RestartGame,
};

pub fn run(state: GameState, atlas: PlayerAtlas) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("up", MoveUp, None),
            KeyBinding::new("w", MoveUp, None),
            KeyBinding::new("down", MoveDown, None),
            KeyBinding::new("s", MoveDown, None),
            KeyBinding::new("space", Jump, None),
            KeyBinding::new("enter", Confirm, None),
            KeyBinding::new("r", RestartGame, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);

        let canvas = size(px(state.config.window_width), px(state.config.window_height));
        let bounds = Bounds::centered(None, canvas, cx);
        let window = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Dino Run".into()),
                    ..Default::default()
                }),
                is_resizable: false,
                ..Default::default()
            },
            |_, cx| cx.new(|cx| DinoRun::new(state, atlas, cx)),
        );
        let window = match window {
            Ok(window) => window,
            Err(err) => {
                log::error!("Failed to open the game window: {err:#}");
                std::process::exit(1);
            }
        };

        let game = match window.update(cx, |view: &mut DinoRun, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
            cx.entity()
        }) {
            Ok(game) => game,
            Err(err) => {
                log::error!("Game window closed during startup: {err:#}");
                std::process::exit(1);
            }
        };

        spawn_game_loop(game, cx);
        cx.on_action(|_: &QuitGame, cx| cx.quit());
        cx.on_window_closed(|cx| cx.quit()).detach();
        cx.activate(true);
    });
    log::info!("Dino Run closed");
}

fn spawn_game_loop(game: gpui::Entity<DinoRun>, cx: &mut App) {
    cx.spawn({
        async move |cx| loop {
            let delay = match game.read_with(cx, |game, _| game.frame_delay()) {
                Ok(duration) => duration,
                Err(_) => break,
            };

            Timer::after(delay).await;
            if game
                .update(cx, |game, cx| {
                    game.tick(cx);
                })
                .is_err()
            {
                break;
            }
        }
    })
    .detach();
}
