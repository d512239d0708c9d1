use macroquad::prelude::*;
use snake_engine::{GameOverReason, GameStatus, Snapshot};

use super::layout::{BoardLayout, Button, ButtonKind, MenuLayout};

/// 渲染上下文，负责所有绘制操作
pub struct Renderer;

impl Renderer {
    // ─────────────────────────────────────────────────────
    // 颜色常量
    // ─────────────────────────────────────────────────────
    const BG_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    const GRID_LINE: Color = Color::new(0.196, 0.196, 0.196, 1.0); // 50,50,50
    const FOOD_COLOR: Color = Color::new(0.922, 0.345, 0.345, 1.0); // 235,88,88
    const SNAKE_HEAD: Color = Color::new(0.471, 0.863, 0.471, 1.0); // 120,220,120
    const SNAKE_BODY: Color = Color::new(0.314, 0.706, 0.353, 1.0); // 80,180,90
    const TEXT_FG: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    const TEXT_MUTED: Color = Color::new(0.667, 0.667, 0.667, 1.0); // 170,170,170
    const TEXT_ALERT: Color = Color::new(1.0, 0.2, 0.2, 1.0);
    const BUTTON_HOVER: Color = Color::new(1.0, 1.0, 0.0, 1.0);

    // ─────────────────────────────────────────────────────
    // 整体绘制入口
    // ─────────────────────────────────────────────────────
    pub fn draw_frame(
        board: &BoardLayout,
        menu: &MenuLayout,
        snapshot: &Snapshot,
        hovered: Option<ButtonKind>,
    ) {
        clear_background(Self::BG_COLOR);

        match snapshot.status {
            GameStatus::Running => {
                Self::draw_grid(board, snapshot.grid_width, snapshot.grid_height);
                Self::draw_cell(board, snapshot.food, Self::FOOD_COLOR);
                for (i, &cell) in snapshot.body.iter().enumerate() {
                    let color = if i == 0 { Self::SNAKE_HEAD } else { Self::SNAKE_BODY };
                    Self::draw_cell(board, cell, color);
                }
                draw_text(&format!("Score: {}", snapshot.score), 10.0, 20.0, 20.0, Self::TEXT_FG);
            }
            GameStatus::NotStarted => Self::draw_start_screen(),
            GameStatus::GameOver => Self::draw_game_over(snapshot),
        }

        for button in menu.visible(snapshot.status) {
            Self::draw_button(&button, hovered == Some(button.kind));
        }
    }

    // ─────────────────────────────────────────────────────
    // 棋盘
    // ─────────────────────────────────────────────────────
    fn draw_grid(board: &BoardLayout, grid_width: i32, grid_height: i32) {
        for x in 0..grid_width {
            for y in 0..grid_height {
                let rect = board.cell_rect((x, y));
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, Self::GRID_LINE);
            }
        }
    }

    fn draw_cell(board: &BoardLayout, cell: (i32, i32), color: Color) {
        let rect = board.cell_rect(cell);
        draw_rectangle(rect.x + 1.0, rect.y + 1.0, (rect.w - 2.0).max(1.0), (rect.h - 2.0).max(1.0), color);
    }

    // ─────────────────────────────────────────────────────
    // 菜单界面
    // ─────────────────────────────────────────────────────
    fn draw_start_screen() {
        let mid = screen_height() * 0.5;
        Self::draw_centered("Snake Game", mid - 100.0, 40.0, Self::TEXT_FG);
        Self::draw_centered("Use arrow keys to move the snake.", mid - 50.0, 24.0, Self::TEXT_MUTED);
    }

    fn draw_game_over(snapshot: &Snapshot) {
        let mid = screen_height() * 0.5;
        Self::draw_centered("Game Over", mid - 100.0, 40.0, Self::TEXT_ALERT);
        Self::draw_centered(&format!("Final Score: {}", snapshot.score), mid - 60.0, 26.0, Self::TEXT_FG);

        let reason = match snapshot.game_over_reason {
            Some(GameOverReason::HitWall) => "Hit the wall",
            Some(GameOverReason::HitSelf) => "Ran into itself",
            None => "",
        };
        Self::draw_centered(reason, mid - 38.0, 18.0, Self::TEXT_MUTED);
    }

    fn draw_button(button: &Button, hovered: bool) {
        let color = if hovered { Self::BUTTON_HOVER } else { Self::TEXT_FG };
        let label = button.kind.label();
        let font_size = 26.0;
        let dims = measure_text(label, None, font_size as u16, 1.0);
        let x = button.rect.x + (button.rect.w - dims.width) * 0.5;
        let y = button.rect.y + (button.rect.h - dims.height) * 0.5 + dims.offset_y;
        draw_text(label, x, y, font_size, color);
    }

    fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
        if text.is_empty() {
            return;
        }
        let dims = measure_text(text, None, font_size as u16, 1.0);
        draw_text(text, (screen_width() - dims.width) * 0.5, y, font_size, color);
    }
}
