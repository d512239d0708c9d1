use anyhow::{Context, Result};
use macroquad::prelude::*;
use snake_engine::{Game, GameConfig, GameEvent, GameStatus};

use crate::input::{Action, InputHandler};
use crate::ui::{BoardLayout, ButtonKind, MenuLayout, Renderer};

/// 应用层：编排游戏逻辑、输入、菜单与渲染
pub struct App {
    game: Game,
    step_time: f32,
    step_timer: f32,
    hovered: Option<ButtonKind>,
    quit_requested: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        let step_time = config.tick_interval_ms as f32 / 1000.0;
        let game = Game::new(config).context("failed to create game")?;
        Ok(Self {
            game,
            step_time,
            step_timer: 0.0,
            hovered: None,
            quit_requested: false,
        })
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// 每帧调用：处理输入 → 更新逻辑 → 渲染
    pub fn tick(&mut self) {
        let dt = get_frame_time();
        let menu = MenuLayout::compute(screen_width(), screen_height());

        self.handle_input(&menu);
        self.update(dt);
        self.render(&menu);
    }

    // ─────────────────────────────────────────────────────
    // 输入处理
    // ─────────────────────────────────────────────────────
    fn handle_input(&mut self, menu: &MenuLayout) {
        for action in InputHandler::poll() {
            match action {
                Action::Move(dir) => {
                    if self.game.status() == GameStatus::Running {
                        self.game.handle(GameEvent::Turn(dir));
                    }
                }
                Action::Hover(x, y) => {
                    self.hovered = menu.hit_test(x, y, self.game.status());
                }
                Action::Click(x, y) => match menu.hit_test(x, y, self.game.status()) {
                    Some(ButtonKind::Start | ButtonKind::Restart) => {
                        self.game.handle(GameEvent::Start);
                        self.step_timer = 0.0;
                        self.hovered = None;
                    }
                    Some(ButtonKind::Quit) => {
                        self.quit_requested = true;
                        return;
                    }
                    None => {}
                },
            }
        }
    }

    // ─────────────────────────────────────────────────────
    // 逻辑更新
    // ─────────────────────────────────────────────────────
    fn update(&mut self, dt: f32) {
        // 非运行状态下定时器停摆
        if self.game.status() != GameStatus::Running {
            return;
        }

        self.step_timer += dt;
        while self.step_timer >= self.step_time {
            self.step_timer -= self.step_time;
            if self.game.handle(GameEvent::Tick) != GameStatus::Running {
                self.step_timer = 0.0;
                break;
            }
        }
    }

    // ─────────────────────────────────────────────────────
    // 渲染
    // ─────────────────────────────────────────────────────
    fn render(&self, menu: &MenuLayout) {
        let grid = self.game.grid();
        let board = BoardLayout::compute(screen_width(), screen_height(), grid.width, grid.height);
        Renderer::draw_frame(&board, menu, &self.game.snapshot(), self.hovered);
    }
}
