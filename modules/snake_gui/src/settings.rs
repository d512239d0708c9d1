use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use macroquad::prelude::Conf;
use snake_engine::GameConfig;

/// 指向 JSON 配置文件的环境变量
pub const CONFIG_ENV: &str = "SNAKE_CONFIG";

pub const TILE_SIZE: f32 = 25.0;
pub const WINDOW_TITLE: &str = "Snake Game";

pub fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: (config.grid_width as f32 * TILE_SIZE) as i32,
        window_height: (config.grid_height as f32 * TILE_SIZE) as i32,
        ..Default::default()
    }
}

/// 读取 `SNAKE_CONFIG` 指定的配置；未设置时返回默认配置
pub fn load_config() -> Result<GameConfig> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => load_config_from(Path::new(&path)),
        None => {
            log::info!("{CONFIG_ENV} not set, using default config");
            Ok(GameConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = GameConfig::from_json_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("snake_gui_{}_{name}.json", std::process::id()));
        fs::write(&path, contents).expect("temp dir is writable");
        path
    }

    #[test]
    fn load_config_from_reads_json_file() {
        let path = write_temp("ok", r#"{ "grid_width": 24, "tick_interval_ms": 80 }"#);
        let config = load_config_from(&path).expect("valid file");
        assert_eq!(config.grid_width, 24);
        assert_eq!(config.tick_interval_ms, 80);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_config_from_reports_the_path_on_error() {
        let path = write_temp("bad", r#"{ "grid_height": 2 }"#);
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = env::temp_dir().join("snake_gui_definitely_missing.json");
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn window_matches_board_in_tiles() {
        let conf = window_conf(&GameConfig::default());
        assert_eq!((conf.window_width, conf.window_height), (500, 500));
    }
}
