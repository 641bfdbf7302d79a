use super::*;

#[test]
fn test_defaults_match_reference_behaviour() {
    let config = EngineConfig::default();
    assert_eq!(config.depth, 5);
    assert_eq!(config.jitter, 10);
    assert_eq!(config.seed, None);
}

#[test]
fn test_parse_full_config() {
    let config = EngineConfig::from_toml_str("depth = 3\njitter = 4\nseed = 99\n").unwrap();
    assert_eq!(
        config,
        EngineConfig {
            depth: 3,
            jitter: 4,
            seed: Some(99),
        }
    );
}

#[test]
fn test_missing_fields_take_defaults() {
    let config = EngineConfig::from_toml_str("jitter = 0").unwrap();
    assert_eq!(config.depth, 5);
    assert_eq!(config.jitter, 0);
}

#[test]
fn test_unknown_field_is_rejected() {
    let err = EngineConfig::from_toml_str("depht = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(
        EngineConfig::from_toml_str("depth = 0"),
        Err(ConfigError::DepthTooLow)
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("jitter = -1"),
        Err(ConfigError::NegativeJitter(-1))
    ));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    assert!(matches!(
        EngineConfig::from_toml_str("jitter = 5000000\nseed = 1\ndepth = 1"),
        Err(ConfigError::JitterTooLarge(5_000_000))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("depth = 13"),
        Err(ConfigError::DepthTooHigh(13))
    ));

    let edge = EngineConfig::from_toml_str("depth = 12\njitter = 100").unwrap();
    assert_eq!((edge.depth, edge.jitter), (MAX_DEPTH, MAX_JITTER));
}

#[test]
fn test_load_reports_missing_file() {
    let err = EngineConfig::load("/nonexistent/minimax.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/minimax.toml"));
}

#[test]
fn test_load_reads_file() {
    let path = std::env::temp_dir().join(format!("minimax-config-{}.toml", std::process::id()));
    std::fs::write(&path, "depth = 2\n").unwrap();

    let config = EngineConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.depth, 2);
}

#[test]
fn test_build_searcher_uses_config() {
    let config = EngineConfig {
        depth: 3,
        jitter: 0,
        seed: None,
    };
    let mut searcher = config.build_searcher();
    assert_eq!(searcher.depth(), 3);
    assert_eq!(searcher.evaluator_mut().jitter_bound(), 0);
}
