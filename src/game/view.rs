//! file: view.rs
//! author: Jacob Xie
//! date: 2025/12/20 15:02:44 Saturday
//! brief: gpui view that owns the game state, latches input and draws frames

use std::time::{Duration, Instant};

use gpui::{
    AnyElement, App, Context, Div, FocusHandle, Focusable, Render, SharedString, Window, div, img,
    prelude::*, px, rgb,
};

use super::{
    Confirm, FrameInput, GameState, Jump, MenuOption, MoveDown, MoveUp, ObstacleKind, Rect,
    RestartGame, Screen,
};
use crate::assets::PlayerAtlas;

const BACKGROUND: u32 = 0x505050;
const TEXT: u32 = 0xf5f5f5;
const MENU_IDLE: u32 = 0xc8c8c8;
const RED: u32 = 0xe62937;
const BLUE: u32 = 0x0079f1;
const AIR: u32 = 0xfdf900;
const TEXT_SIZE: f32 = 20.0;

pub struct DinoRun {
    state: GameState,
    pending: FrameInput,
    last_frame: Instant,
    atlas: PlayerAtlas,
    focus_handle: FocusHandle,
}

impl DinoRun {
    pub fn new(state: GameState, atlas: PlayerAtlas, cx: &mut Context<Self>) -> Self {
        Self {
            state,
            pending: FrameInput::default(),
            last_frame: Instant::now(),
            atlas,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn frame_delay(&self) -> Duration {
        self.state.config.frame_duration
    }

    /// One frame: feed the presses since the last frame into the state, then
    /// schedule a redraw.
    pub fn tick(&mut self, cx: &mut Context<Self>) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        let input = std::mem::take(&mut self.pending);
        self.state.update(&input, dt);

        if self.state.exit_requested {
            cx.quit();
            return;
        }
        cx.notify();
    }

    fn latch(&mut self, press: impl FnOnce(&mut FrameInput)) {
        press(&mut self.pending);
    }

    fn title_elements(&self) -> Vec<AnyElement> {
        let config = &self.state.config;
        let selected = self.state.selected_option();

        let mut elements = vec![
            div()
                .absolute()
                .left(px(config.window_width / 2. - 90.))
                .top(px(80.))
                .text_3xl()
                .text_color(rgb(TEXT))
                .child("DINO RUN")
                .into_any_element(),
        ];
        elements.extend(MenuOption::ALL.into_iter().enumerate().map(|(i, option)| {
            let color = if option == selected { RED } else { MENU_IDLE };
            label(350., 200. + 20. * i as f32, option.label(), color)
        }));
        elements
    }

    fn gameplay_elements(&self) -> Vec<AnyElement> {
        let config = &self.state.config;
        let mut elements: Vec<AnyElement> = self
            .state
            .obstacles
            .iter()
            .filter(|o| o.rect.right() > 0. && o.rect.x < config.window_width)
            .map(|o| {
                let fill = match o.kind {
                    ObstacleKind::Ground => RED,
                    ObstacleKind::Air => AIR,
                };
                place(o.rect)
                    .bg(rgb(fill))
                    .border_2()
                    .border_color(rgb(BLUE))
                    .into_any_element()
            })
            .collect();

        elements.push(self.player_sprite());
        elements.push(label(
            config.window_width - 150.,
            0.,
            format!("Score: {:4}", self.state.score),
            TEXT,
        ));
        elements.push(label(
            8.,
            0.,
            format!("Obstacles left: {}", self.state.obstacles_remaining()),
            MENU_IDLE,
        ));

        if !self.state.is_alive {
            let (cx, cy) = (config.window_width / 2., config.window_height / 2.);
            elements.push(label(cx - 50., cy, "Game Over", TEXT));
            elements.push(label(cx - 90., cy + 24., "Press R to restart", MENU_IDLE));
        }
        elements
    }

    fn ending_elements(&self) -> Vec<AnyElement> {
        let config = &self.state.config;
        let (cx, cy) = (config.window_width / 2., config.window_height / 2.);
        vec![
            label(cx - 180., cy, "Game Over", TEXT),
            label(
                cx - 220.,
                cy + 20.,
                format!("Score: {:4}", self.state.score),
                TEXT,
            ),
        ]
    }

    fn credits_elements(&self) -> Vec<AnyElement> {
        let lines = [
            "Credits",
            "Game design and code: the Dino Run team",
            "Built with gpui",
            "Press Esc to quit",
        ];
        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let color = if i == 0 { RED } else { MENU_IDLE };
                label(250., 90. + 28. * i as f32, line, color)
            })
            .collect()
    }

    /// Crops the first atlas cell onto the player rectangle.
    fn player_sprite(&self) -> AnyElement {
        let rect = self.state.player.rect;
        let (sx, sy) = self.atlas.cell_scale(rect.width, rect.height);

        place(rect)
            .overflow_hidden()
            .child(
                img(self.atlas.path.clone())
                    .absolute()
                    .left(px(0.))
                    .top(px(0.))
                    .w(px(self.atlas.width as f32 * sx))
                    .h(px(self.atlas.height as f32 * sy)),
            )
            .child(
                div()
                    .absolute()
                    .left(px(0.))
                    .top(px(0.))
                    .size_full()
                    .border_2()
                    .border_color(rgb(RED)),
            )
            .into_any_element()
    }
}

fn place(rect: Rect) -> Div {
    div()
        .absolute()
        .left(px(rect.x))
        .top(px(rect.y))
        .w(px(rect.width))
        .h(px(rect.height))
}

fn label(x: f32, y: f32, text: impl Into<SharedString>, color: u32) -> AnyElement {
    let text: SharedString = text.into();
    div()
        .absolute()
        .left(px(x))
        .top(px(y))
        .text_size(px(TEXT_SIZE))
        .text_color(rgb(color))
        .child(text)
        .into_any_element()
}

impl Render for DinoRun {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let config = &self.state.config;
        let elements = match self.state.screen {
            Screen::Title => self.title_elements(),
            Screen::Gameplay => self.gameplay_elements(),
            Screen::Ending => self.ending_elements(),
            Screen::Credits => self.credits_elements(),
        };

        div()
            .bg(rgb(BACKGROUND))
            .size_full()
            .track_focus(&self.focus_handle(cx))
            .key_context("dino-run")
            .on_action(cx.listener(|this, _: &MoveUp, _, _| this.latch(|i| i.up = true)))
            .on_action(cx.listener(|this, _: &MoveDown, _, _| this.latch(|i| i.down = true)))
            .on_action(cx.listener(|this, _: &Jump, _, _| this.latch(|i| i.jump = true)))
            .on_action(cx.listener(|this, _: &Confirm, _, _| this.latch(|i| i.confirm = true)))
            .on_action(
                cx.listener(|this, _: &RestartGame, _, _| this.latch(|i| i.restart = true)),
            )
            .child(
                div()
                    .relative()
                    .overflow_hidden()
                    .w(px(config.window_width))
                    .h(px(config.window_height))
                    .children(elements),
            )
    }
}

impl Focusable for DinoRun {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
