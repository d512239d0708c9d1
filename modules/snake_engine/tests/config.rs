use snake_engine::config::MAX_GRID_SIZE;
use snake_engine::{ConfigError, FoodSpawn, Game, GameConfig};

#[test]
fn default_config_should_match_classic_board() {
    let config = GameConfig::default();
    assert_eq!((config.grid_width, config.grid_height), (20, 20));
    assert_eq!(config.initial_length, 5);
    assert_eq!(config.tick_interval_ms, 100);
    assert_eq!(config.food_spawn, FoodSpawn::Anywhere);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_should_fill_in_defaults() {
    let config = GameConfig::from_json_str(r#"{ "grid_width": 30, "food_spawn": "avoid_body" }"#)
        .expect("partial config parses");
    assert_eq!(config.grid_width, 30);
    assert_eq!(config.grid_height, 20);
    assert_eq!(config.food_spawn, FoodSpawn::AvoidBody);
    assert_eq!(config.seed, None);
}

#[test]
fn malformed_json_should_be_a_parse_error() {
    let err = GameConfig::from_json_str("{ grid_width: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn tiny_grid_should_be_rejected() {
    let err = GameConfig::from_json_str(r#"{ "grid_width": 3 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::GridTooSmall { width: 3, .. }));
}

#[test]
fn initial_length_must_fit_below_center() {
    let config = GameConfig {
        grid_height: 8,
        initial_length: 5,
        ..GameConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InitialLength { length: 5, max: 4 })
    ));

    let zero = GameConfig {
        initial_length: 0,
        ..GameConfig::default()
    };
    assert!(matches!(zero.validate(), Err(ConfigError::InitialLength { .. })));
}

#[test]
fn zero_tick_interval_should_be_rejected() {
    let config = GameConfig {
        tick_interval_ms: 0,
        ..GameConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ZeroTickInterval)));
    assert!(Game::new(config).is_err());
}

#[test]
fn oversized_grid_should_be_rejected_before_start() {
    let json = r#"{ "grid_width": 60000, "grid_height": 60000, "food_spawn": "avoid_body", "seed": 1 }"#;
    let err = GameConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, ConfigError::GridTooLarge { width: 60000, height: 60000, .. }));

    let config = GameConfig {
        grid_width: MAX_GRID_SIZE + 1,
        ..GameConfig::default()
    };
    assert!(Game::new(config).is_err());
}

#[test]
fn largest_grid_should_start_with_avoid_body() {
    let config = GameConfig {
        grid_width: MAX_GRID_SIZE,
        grid_height: MAX_GRID_SIZE,
        food_spawn: FoodSpawn::AvoidBody,
        seed: Some(1),
        ..GameConfig::default()
    };
    let mut game = Game::new(config).expect("max size is valid");
    game.start();
    assert!(game.grid().in_bounds(game.food()));
    assert!(!game.body().contains(&game.food()));
}
