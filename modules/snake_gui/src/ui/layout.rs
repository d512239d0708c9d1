use macroquad::prelude::*;
use snake_engine::{Cell, GameStatus};

pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 30.0;

/// 游戏棋盘布局信息（正方形格子，居中）
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
    pub tile: f32,
}

impl BoardLayout {
    pub fn compute(screen_w: f32, screen_h: f32, grid_width: i32, grid_height: i32) -> Self {
        let tile = (screen_w / grid_width as f32)
            .min(screen_h / grid_height as f32)
            .max(1.0);
        let width = tile * grid_width as f32;
        let height = tile * grid_height as f32;

        Self {
            origin_x: ((screen_w - width) * 0.5).max(0.0),
            origin_y: ((screen_h - height) * 0.5).max(0.0),
            width,
            height,
            tile,
        }
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let (x, y) = cell;
        Rect::new(
            self.origin_x + x as f32 * self.tile,
            self.origin_y + y as f32 * self.tile,
            self.tile,
            self.tile,
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonKind {
    Start,
    Restart,
    Quit,
}

impl ButtonKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Restart => "Restart",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Button {
    pub kind: ButtonKind,
    pub rect: Rect,
}

/// 菜单按钮布局：Start / Restart / Quit 自上而下排在窗口中央
pub struct MenuLayout {
    start: Button,
    restart: Button,
    quit: Button,
}

impl MenuLayout {
    pub fn compute(screen_w: f32, screen_h: f32) -> Self {
        let x = screen_w * 0.5 - BUTTON_WIDTH * 0.5;
        let mid = screen_h * 0.5;
        let button = |kind, y| Button {
            kind,
            rect: Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
        };

        Self {
            start: button(ButtonKind::Start, mid - BUTTON_HEIGHT),
            restart: button(ButtonKind::Restart, mid),
            quit: button(ButtonKind::Quit, mid + BUTTON_HEIGHT),
        }
    }

    /// 当前界面上可见的按钮；游戏进行中没有菜单
    pub fn visible(&self, status: GameStatus) -> Vec<Button> {
        match status {
            GameStatus::NotStarted => vec![self.start, self.quit],
            GameStatus::GameOver => vec![self.restart, self.quit],
            GameStatus::Running => Vec::new(),
        }
    }

    pub fn hit_test(&self, x: f32, y: f32, status: GameStatus) -> Option<ButtonKind> {
        let point = vec2(x, y);
        self.visible(status)
            .into_iter()
            .find(|button| button.rect.contains(point))
            .map(|button| button.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_fills_window_with_square_tiles() {
        let board = BoardLayout::compute(500.0, 500.0, 20, 20);
        assert_eq!(board.tile, 25.0);
        assert_eq!((board.origin_x, board.origin_y), (0.0, 0.0));
        assert_eq!(board.cell_rect((3, 4)), Rect::new(75.0, 100.0, 25.0, 25.0));
    }

    #[test]
    fn board_is_centered_in_wide_window() {
        let board = BoardLayout::compute(700.0, 500.0, 20, 20);
        assert_eq!(board.tile, 25.0);
        assert_eq!(board.origin_x, 100.0);
        assert_eq!(board.origin_y, 0.0);
    }

    #[test]
    fn start_screen_shows_start_and_quit() {
        let menu = MenuLayout::compute(500.0, 500.0);
        let kinds: Vec<_> = menu
            .visible(GameStatus::NotStarted)
            .iter()
            .map(|b| b.kind)
            .collect();
        assert_eq!(kinds, vec![ButtonKind::Start, ButtonKind::Quit]);
        assert!(menu.visible(GameStatus::Running).is_empty());
    }

    #[test]
    fn hit_test_resolves_buttons_for_current_screen() {
        let menu = MenuLayout::compute(500.0, 500.0);
        // Start: y in [220, 250], Restart: [250, 280], Quit: [280, 310]
        assert_eq!(menu.hit_test(250.0, 235.0, GameStatus::NotStarted), Some(ButtonKind::Start));
        assert_eq!(menu.hit_test(250.0, 265.0, GameStatus::NotStarted), None);
        assert_eq!(menu.hit_test(250.0, 265.0, GameStatus::GameOver), Some(ButtonKind::Restart));
        assert_eq!(menu.hit_test(250.0, 295.0, GameStatus::GameOver), Some(ButtonKind::Quit));
        assert_eq!(menu.hit_test(250.0, 235.0, GameStatus::Running), None);
        assert_eq!(menu.hit_test(10.0, 10.0, GameStatus::NotStarted), None);
    }
}
