use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_GRID_SIZE: i32 = 4;
pub const MAX_GRID_SIZE: i32 = 100;

/// 食物刷新策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSpawn {
    /// 在整个棋盘上均匀随机，可能落在蛇身上
    #[default]
    Anywhere,
    /// 只在空闲格子中均匀随机
    AvoidBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub initial_length: usize,
    pub tick_interval_ms: u64,
    pub food_spawn: FoodSpawn,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_length: 5,
            tick_interval_ms: 100,
            food_spawn: FoodSpawn::Anywhere,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall { width: i32, height: i32, min: i32 },
    #[error("grid must be at most {max}x{max} cells, got {width}x{height}")]
    GridTooLarge { width: i32, height: i32, max: i32 },
    #[error("initial length must be between 1 and {max}, got {length}")]
    InitialLength { length: usize, max: usize },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < MIN_GRID_SIZE || self.grid_height < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                min: MIN_GRID_SIZE,
            });
        }
        if self.grid_width > MAX_GRID_SIZE || self.grid_height > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_SIZE,
            });
        }
        // 初始蛇身从中心向下排布，必须整段落在棋盘内
        let max = self.max_initial_length();
        if self.initial_length == 0 || self.initial_length > max {
            return Err(ConfigError::InitialLength {
                length: self.initial_length,
                max,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn max_initial_length(&self) -> usize {
        (self.grid_height - self.grid_height / 2).max(0) as usize
    }
}
