//! file: state.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:35:09 Saturday
//! brief: the owned game state and its per-frame update

use rand::rngs::StdRng;

use super::{FrameInput, GameConfig, MenuOption, Obstacle, Player, Screen, generate_obstacles};

pub struct GameState {
    pub config: GameConfig,
    pub screen: Screen,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub is_alive: bool,
    pub score: u32,
    pub option_select: usize,
    pub exit_requested: bool,
    score_timer: f32,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let obstacles = generate_obstacles(&config, &mut rng);
        let player = Player::spawn(&config);

        Self {
            config,
            screen: Screen::Title,
            player,
            obstacles,
            is_alive: true,
            score: 0,
            option_select: 0,
            exit_requested: false,
            score_timer: 0.0,
            rng,
        }
    }

    /// Starts a fresh run: new obstacle pool, player back at start, score zeroed.
    pub fn reset(&mut self) {
        self.obstacles = generate_obstacles(&self.config, &mut self.rng);
        self.player = Player::spawn(&self.config);
        self.is_alive = true;
        self.score = 0;
        self.score_timer = 0.0;
        self.option_select = 0;
        self.exit_requested = false;
        self.set_screen(Screen::Gameplay);
    }

    pub fn selected_option(&self) -> MenuOption {
        MenuOption::from_index(self.option_select)
    }

    /// Obstacles whose right edge is still ahead of the player's left edge.
    pub fn obstacles_remaining(&self) -> usize {
        let player_left = self.player.rect.x;
        self.obstacles
            .iter()
            .filter(|o| o.rect.right() > player_left)
            .count()
    }

    /// Advances one frame. Never draws.
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        let dt = if dt > self.config.max_frame_dt {
            log::debug!("Clamping frame dt {dt:.3}s to {:.3}s", self.config.max_frame_dt);
            self.config.max_frame_dt
        } else {
            dt.max(0.0)
        };

        match self.screen {
            Screen::Title => self.update_title(input),
            Screen::Gameplay => self.update_gameplay(input, dt),
            Screen::Ending | Screen::Credits => {}
        }
    }

    fn update_title(&mut self, input: &FrameInput) {
        let last = MenuOption::ALL.len() - 1;
        if input.up {
            self.option_select = self.option_select.saturating_sub(1);
        }
        if input.down {
            self.option_select = (self.option_select + 1).min(last);
        }

        if input.confirm {
            match self.selected_option() {
                MenuOption::StartGame => self.set_screen(Screen::Gameplay),
                MenuOption::Credits => self.set_screen(Screen::Credits),
                MenuOption::ExitGame => {
                    log::info!("Exit selected from the title menu");
                    self.exit_requested = true;
                }
            }
        }
    }

    fn update_gameplay(&mut self, input: &FrameInput, dt: f32) {
        if !self.is_alive {
            if input.restart {
                log::info!("Restarting run");
                self.reset();
            }
            return;
        }

        self.tick_score(dt);
        self.step_physics(input.wants_jump(), dt);
    }

    fn tick_score(&mut self, dt: f32) {
        self.score_timer += dt;
        while self.score_timer >= self.config.score_interval {
            self.score_timer -= self.config.score_interval;
            self.score += 1;
        }
    }

    fn step_physics(&mut self, jump: bool, dt: f32) {
        let config = &self.config;

        if jump {
            self.player.try_jump(config.jump_speed);
        }
        self.player.integrate(dt, config.gravity, config.ground_y);

        for obstacle in &mut self.obstacles {
            obstacle.rect.x -= config.scroll_speed;
        }

        let player_rect = self.player.rect;
        if self.obstacles.iter().any(|o| o.rect.overlaps(player_rect)) {
            self.is_alive = false;
            log::info!("Player hit an obstacle, final score {}", self.score);
        }

        if self.is_alive && self.obstacles_remaining() == 0 {
            log::info!(
                "All {} obstacles have scrolled past the player, run complete with score {}",
                self.obstacles.len(),
                self.score
            );
            self.set_screen(Screen::Ending);
        }
    }

    fn set_screen(&mut self, next: Screen) {
        if self.screen != next {
            log::info!("Screen {} -> {}", self.screen.name(), next.name());
        }
        self.screen = next;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::game::Rect;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), StdRng::seed_from_u64(42))
    }

    fn playing_state() -> GameState {
        let mut state = new_state();
        state.screen = Screen::Gameplay;
        state
    }

    /// Gameplay with a single obstacle far beyond anything a test reaches.
    fn open_road() -> GameState {
        let mut state = playing_state();
        state.obstacles = vec![Obstacle::ground(1.0e6, 210.0, 50.0, 50.0)];
        state
    }

    fn press(f: impl FnOnce(&mut FrameInput)) -> FrameInput {
        let mut input = FrameInput::default();
        f(&mut input);
        input
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    // ── Title menu ──

    #[test]
    fn starts_on_title_with_full_pool() {
        let state = new_state();
        assert_eq!(state.screen, Screen::Title);
        assert_eq!(state.option_select, 0);
        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacles.len(), state.config.max_obstacles);
    }

    #[test]
    fn menu_index_is_clamped() {
        let mut state = new_state();

        state.update(&press(|i| i.up = true), DT);
        assert_eq!(state.option_select, 0);

        for _ in 0..5 {
            state.update(&press(|i| i.down = true), DT);
            assert!(state.option_select <= 2);
        }
        assert_eq!(state.option_select, 2);

        state.update(&press(|i| i.up = true), DT);
        assert_eq!(state.option_select, 1);
    }

    #[test]
    fn menu_index_stays_in_range_for_mixed_presses() {
        let mut state = new_state();
        let presses = [true, true, false, true, false, false, false, true, true, true, false];
        for down in presses {
            let input = if down {
                press(|i| i.down = true)
            } else {
                press(|i| i.up = true)
            };
            state.update(&input, DT);
            assert!(state.option_select <= 2);
        }
    }

    #[test]
    fn confirm_start_enters_gameplay() {
        let mut state = new_state();
        state.update(&press(|i| i.confirm = true), DT);
        assert_eq!(state.screen, Screen::Gameplay);
        assert!(!state.exit_requested);
    }

    #[test]
    fn confirm_credits_enters_credits() {
        let mut state = new_state();
        state.update(&press(|i| i.down = true), DT);
        state.update(&press(|i| i.confirm = true), DT);
        assert_eq!(state.screen, Screen::Credits);
    }

    #[test]
    fn confirm_exit_requests_exit() {
        let mut state = new_state();
        state.update(&press(|i| i.down = true), DT);
        state.update(&press(|i| i.down = true), DT);
        state.update(&press(|i| i.confirm = true), DT);
        assert!(state.exit_requested);
        assert_eq!(state.screen, Screen::Title);
    }

    #[test]
    fn title_does_not_advance_physics() {
        let mut state = new_state();
        let first_x = state.obstacles[0].rect.x;
        state.update(&press(|i| i.jump = true), DT);
        assert_eq!(state.obstacles[0].rect.x, first_x);
        assert!(state.player.can_jump);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn credits_and_ending_are_terminal() {
        for screen in [Screen::Credits, Screen::Ending] {
            let mut state = new_state();
            state.screen = screen;
            let all = FrameInput {
                up: true,
                down: true,
                jump: true,
                confirm: true,
                restart: true,
            };
            state.update(&all, DT);
            assert_eq!(state.screen, screen);
            assert!(!state.exit_requested);
        }
    }

    // ── Gameplay ──

    #[test]
    fn jump_from_rest() {
        let mut state = playing_state();
        let ground = state.config.ground_y;
        assert!(state.player.can_jump);

        state.update(&press(|i| i.jump = true), DT);
        assert!(!state.player.can_jump);
        assert!(state.player.rect.y < ground);
        assert!(state.player.speed < 0.0);

        let y = state.player.rect.y;
        state.update(&idle(), DT);
        assert!(state.player.rect.y < y);
    }

    #[test]
    fn up_key_also_jumps() {
        let mut state = playing_state();
        state.update(&press(|i| i.up = true), DT);
        assert!(!state.player.can_jump);
    }

    #[test]
    fn player_never_sinks_below_ground() {
        let mut state = open_road();
        for frame in 0..600 {
            let input = if frame % 37 == 0 {
                press(|i| i.jump = true)
            } else {
                idle()
            };
            state.update(&input, DT);
            assert!(state.player.rect.y <= state.config.ground_y);
        }
    }

    #[test]
    fn obstacles_scroll_by_constant_speed() {
        let mut state = playing_state();
        let before: Vec<f32> = state.obstacles.iter().map(|o| o.rect.x).collect();
        state.update(&idle(), DT);
        for (obstacle, x) in state.obstacles.iter().zip(before) {
            assert_eq!(obstacle.rect.x, x - state.config.scroll_speed);
        }
        assert_eq!(state.obstacles.len(), state.config.max_obstacles);
    }

    #[test]
    fn collision_kills_player_on_that_frame() {
        let mut state = playing_state();
        state.player.rect = Rect::new(0.0, 200.0, 60.0, 60.0);
        state.obstacles = vec![Obstacle::ground(0.0, 200.0, 50.0, 50.0)];

        state.update(&idle(), DT);
        assert!(!state.is_alive);
    }

    #[test]
    fn death_is_sticky_and_freezes_the_world() {
        let mut state = playing_state();
        state.player.rect = Rect::new(0.0, 200.0, 60.0, 60.0);
        state.obstacles = vec![Obstacle::ground(0.0, 200.0, 50.0, 50.0)];
        state.update(&idle(), DT);
        assert!(!state.is_alive);

        let score = state.score;
        let x = state.obstacles[0].rect.x;
        for _ in 0..30 {
            state.update(&press(|i| i.jump = true), DT);
        }
        assert!(!state.is_alive);
        assert_eq!(state.score, score);
        assert_eq!(state.obstacles[0].rect.x, x);
    }

    #[test]
    fn jumping_clears_the_first_obstacle() {
        let mut state = playing_state();
        state.obstacles.truncate(1);
        let first = state.obstacles[0].rect;
        // Jump when the obstacle is a quarter second of scrolling away.
        let lead = state.config.scroll_speed * 15.0;

        for _ in 0..600 {
            let gap = state.obstacles[0].rect.x - state.player.rect.right();
            let input = if gap <= lead && state.player.can_jump {
                press(|i| i.jump = true)
            } else {
                idle()
            };
            state.update(&input, DT);
            assert!(state.is_alive, "hit obstacle {first:?}");
        }
        assert_eq!(state.obstacles_remaining(), 0);
        assert_eq!(state.screen, Screen::Ending);
    }

    #[test]
    fn score_ticks_on_interval_and_never_decreases() {
        let mut state = open_road();

        let mut last = state.score;
        for _ in 0..120 {
            state.update(&idle(), DT);
            assert!(state.score >= last);
            last = state.score;
        }
        // Two seconds at one point per 0.1s.
        assert!((19..=20).contains(&state.score), "score {}", state.score);
    }

    #[test]
    fn large_frame_gaps_are_clamped() {
        let mut state = open_road();
        state.update(&idle(), 5.0);
        assert_eq!(state.score, 1);
        assert_eq!(state.player.rect.y, state.config.ground_y);
    }

    #[test]
    fn passing_every_obstacle_ends_the_run() {
        let mut state = playing_state();
        state.obstacles = vec![Obstacle::ground(20.0, 210.0, 50.0, 50.0)];
        state.player.rect.y = 100.0;
        state.player.can_jump = false;

        // The obstacle clears the player's left edge after 2 frames.
        state.update(&idle(), DT);
        assert_eq!(state.screen, Screen::Gameplay);
        state.update(&idle(), DT);
        assert!(state.is_alive);
        assert_eq!(state.obstacles_remaining(), 0);
        assert_eq!(state.screen, Screen::Ending);

        let score = state.score;
        state.update(&press(|i| i.restart = true), DT);
        assert_eq!(state.screen, Screen::Ending);
        assert_eq!(state.score, score);
    }

    #[test]
    fn restart_only_after_death() {
        let mut state = playing_state();
        for _ in 0..10 {
            state.update(&idle(), DT);
        }
        let score = state.score;
        let x = state.obstacles[0].rect.x;

        state.update(&press(|i| i.restart = true), DT);
        assert!(state.score >= score);
        assert!(state.obstacles[0].rect.x < x);
    }

    #[test]
    fn restart_after_death_reinitializes_run() {
        let mut state = playing_state();
        for _ in 0..30 {
            state.update(&idle(), DT);
        }
        state.player.rect = Rect::new(0.0, 200.0, 60.0, 60.0);
        state.obstacles = vec![Obstacle::ground(0.0, 200.0, 50.0, 50.0)];
        state.update(&idle(), DT);
        assert!(!state.is_alive);
        assert!(state.score > 0);

        state.update(&press(|i| i.restart = true), DT);

        let start = Player::spawn(&state.config);
        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.player, start);
        assert_eq!(state.screen, Screen::Gameplay);
        assert_eq!(state.option_select, 0);
        assert_eq!(state.obstacles.len(), state.config.max_obstacles);
        assert_eq!(state.obstacles[0].rect.x, state.config.first_obstacle_x);
        assert_eq!(state.obstacles_remaining(), state.config.max_obstacles);
    }
}
