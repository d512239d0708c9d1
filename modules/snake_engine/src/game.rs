use std::collections::VecDeque;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::{Cell, ConfigError, Direction, FoodSpawn, GameConfig, GameEvent, Grid, Snapshot};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum GameStatus {
    NotStarted,
    Running,
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
}

/// 贪吃蛇核心规则引擎（不依赖任何 UI 库）
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    rng: ChaCha8Rng,
    body: VecDeque<Cell>,
    direction: Direction,
    // 上一次实际移动的方向，防止一个 tick 内连按两次完成掉头
    last_moved: Direction,
    food: Cell,
    score: u32,
    status: GameStatus,
    game_over_reason: Option<GameOverReason>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            body: VecDeque::new(),
            direction: Direction::Up,
            last_moved: Direction::Up,
            food: (0, 0),
            score: 0,
            status: GameStatus::NotStarted,
            game_over_reason: None,
        })
    }

    // ─────────────────────────────────────────────────────
    // 公共只读访问器
    // ─────────────────────────────────────────────────────
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.body.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            status: self.status,
            game_over_reason: self.game_over_reason,
            grid_width: self.grid.width,
            grid_height: self.grid.height,
        }
    }

    // ─────────────────────────────────────────────────────
    // 消息入口
    // ─────────────────────────────────────────────────────
    pub fn handle(&mut self, event: GameEvent) -> GameStatus {
        match event {
            GameEvent::Tick => return self.tick(),
            GameEvent::Turn(dir) => self.set_direction(dir),
            GameEvent::Start => self.start(),
        }
        self.status
    }

    // ─────────────────────────────────────────────────────
    // 开始 / 重新开始
    // ─────────────────────────────────────────────────────
    pub fn start(&mut self) {
        let (head_x, head_y) = self.grid.center();
        self.body.clear();
        for i in 0..self.config.initial_length as i32 {
            self.body.push_back((head_x, head_y + i));
        }
        self.direction = Direction::Up;
        self.last_moved = Direction::Up;
        self.score = 0;
        self.game_over_reason = None;
        self.place_food();
        self.status = GameStatus::Running;
        info!(
            "game started on {}x{} grid, food at {:?}",
            self.grid.width, self.grid.height, self.food
        );
    }

    /// 掉头请求会被静默忽略
    pub fn set_direction(&mut self, next: Direction) {
        // 比只看当前方向更严格：同一 tick 内连按两次也不能掉头
        if next.is_opposite(self.direction) || next.is_opposite(self.last_moved) {
            debug!("ignoring reverse turn {:?} while heading {:?}", next, self.direction);
            return;
        }
        self.direction = next;
    }

    // ─────────────────────────────────────────────────────
    // 核心推进（一步）
    // ─────────────────────────────────────────────────────
    pub fn tick(&mut self) -> GameStatus {
        if self.status != GameStatus::Running {
            return self.status;
        }
        let Some((head_x, head_y)) = self.head() else {
            return self.status;
        };
        let (dx, dy) = self.direction.delta();
        let new_head = (head_x + dx, head_y + dy);

        self.body.push_front(new_head);
        self.last_moved = self.direction;

        if new_head == self.food {
            self.score += 1;
            self.place_food();
            debug!("food eaten at {:?}, score {}, next food {:?}", new_head, self.score, self.food);
        } else {
            self.body.pop_back();
        }

        if !self.grid.in_bounds(new_head) {
            self.end(GameOverReason::HitWall);
        } else if self.body.iter().skip(1).any(|&cell| cell == new_head) {
            self.end(GameOverReason::HitSelf);
        }
        self.status
    }

    pub fn place_food(&mut self) {
        let spawn = self.config.food_spawn;
        self.food = match spawn {
            FoodSpawn::Anywhere => self.random_cell(),
            FoodSpawn::AvoidBody => self.random_free_cell().unwrap_or_else(|| self.random_cell()),
        };
    }

    // ─────────────────────────────────────────────────────
    // 测试辅助
    // ─────────────────────────────────────────────────────
    /// `cells` 按蛇头在前的顺序给出
    pub fn debug_set_body(&mut self, cells: &[Cell], dir: Direction) {
        self.body = cells.iter().copied().collect();
        self.direction = dir;
        self.last_moved = dir;
        self.status = GameStatus::Running;
        self.game_over_reason = None;
    }

    pub fn debug_set_food(&mut self, cell: Cell) {
        self.food = cell;
    }

    // ─────────────────────────────────────────────────────
    // 私有辅助
    // ─────────────────────────────────────────────────────
    fn end(&mut self, reason: GameOverReason) {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        info!("game over ({:?}), final score {}", reason, self.score);
    }

    fn random_cell(&mut self) -> Cell {
        let x = self.rng.gen_range(0..self.grid.width);
        let y = self.rng.gen_range(0..self.grid.height);
        (x, y)
    }

    fn random_free_cell(&mut self) -> Option<Cell> {
        let mut occupied = vec![false; self.grid.cell_count()];
        for &cell in self.body.iter().filter(|&&cell| self.grid.in_bounds(cell)) {
            occupied[self.grid.to_index(cell)] = true;
        }
        let free: Vec<usize> = (0..occupied.len()).filter(|&idx| !occupied[idx]).collect();
        if free.is_empty() {
            return None;
        }
        let idx = free[self.rng.gen_range(0..free.len())];
        Some(self.grid.from_index(idx))
    }
}
