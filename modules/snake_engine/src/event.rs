use crate::Direction;

/// 外壳发给引擎的消息，由 [`crate::Game::handle`] 统一消费
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// 定时器到期，推进一步
    Tick,
    /// 方向键
    Turn(Direction),
    /// 开始 / 重新开始
    Start,
}
