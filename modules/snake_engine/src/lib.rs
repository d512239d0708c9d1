//! Snake Engine - 贪吃蛇规则引擎
//!
//! 不依赖任何 UI 库：外壳通过 [`GameEvent`] 驱动，通过 [`Snapshot`] 读取状态。

pub mod config;
pub mod direction;
pub mod event;
pub mod game;
pub mod grid;
pub mod snapshot;

pub use config::{ConfigError, FoodSpawn, GameConfig};
pub use direction::Direction;
pub use event::GameEvent;
pub use game::{Game, GameOverReason, GameStatus};
pub use grid::{Cell, Grid};
pub use snapshot::Snapshot;
