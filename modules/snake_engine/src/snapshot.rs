use serde::Serialize;

use crate::{Cell, Direction, GameOverReason, GameStatus};

/// 渲染用的只读快照（外壳每帧读取）
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Snapshot {
    pub body: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub game_over_reason: Option<GameOverReason>,
    pub grid_width: i32,
    pub grid_height: i32,
}

impl Snapshot {
    pub fn head(&self) -> Option<Cell> {
        self.body.first().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
