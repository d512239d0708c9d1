//! Snake GUI - 贪吃蛇图形界面
//!
//! 模块结构:
//! - ui: 布局计算（棋盘、菜单按钮）与渲染
//! - input: 键盘 / 鼠标事件翻译
//! - settings: 窗口参数与配置加载
//! - app: 应用层编排，持有规则引擎

mod app;
mod input;
mod settings;
mod ui;

use macroquad::prelude::next_frame;
use snake_engine::GameConfig;

fn main() {
    env_logger::init();

    let config = settings::load_config().unwrap_or_else(|err| {
        log::warn!("{err:#}; falling back to default config");
        GameConfig::default()
    });

    macroquad::Window::from_config(settings::window_conf(&config), run(config));
}

async fn run(config: GameConfig) {
    let mut app = match app::App::new(config) {
        Ok(app) => app,
        Err(err) => {
            log::error!("{err:#}");
            std::process::exit(1);
        }
    };

    loop {
        app.tick();
        if app.quit_requested() {
            log::info!("quit requested, exiting");
            std::process::exit(0);
        }
        next_frame().await;
    }
}
