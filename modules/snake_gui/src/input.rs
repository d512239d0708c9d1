use macroquad::prelude::*;
use snake_engine::Direction;

/// 用户意图（从键盘 / 鼠标事件翻译而来）
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Action {
    Move(Direction),
    Click(f32, f32),
    Hover(f32, f32),
}

/// 输入处理器：把本帧的键盘、鼠标事件翻译成 Action
pub struct InputHandler;

impl InputHandler {
    pub fn poll() -> Vec<Action> {
        let mut actions = Vec::new();

        // 方向键
        if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
            actions.push(Action::Move(Direction::Up));
        }
        if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
            actions.push(Action::Move(Direction::Down));
        }
        if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
            actions.push(Action::Move(Direction::Left));
        }
        if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
            actions.push(Action::Move(Direction::Right));
        }

        // 鼠标：悬停每帧都上报，点击只在按下当帧上报
        let (mx, my) = mouse_position();
        actions.push(Action::Hover(mx, my));
        if is_mouse_button_pressed(MouseButton::Left) {
            actions.push(Action::Click(mx, my));
        }

        actions
    }
}
