use std::io::Write;

use rolling_block::config::{ConfigError, OutputFormat, SolverConfig};
use rolling_block::search::resources::ResourceLimits;

#[test]
fn empty_config_uses_defaults() {
    let c = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(c, SolverConfig::default());
    assert_eq!(c.format, OutputFormat::Text);
    assert!(c.limits.is_none());
}

#[test]
fn parses_all_fields() {
    let c = SolverConfig::from_toml_str(
        r#"
        log_filter = "rolling_block=debug"
        format = "json"

        [limits]
        max_states = 500
        max_runtime_steps = 400
        "#,
    )
    .unwrap();
    assert_eq!(c.log_filter.as_deref(), Some("rolling_block=debug"));
    assert_eq!(c.format, OutputFormat::Json);
    assert_eq!(
        c.limits,
        Some(ResourceLimits {
            max_states: 500,
            max_runtime_steps: 400,
        })
    );
}

#[test]
fn partial_limits_fall_back_to_defaults() {
    let c = SolverConfig::from_toml_str("[limits]\nmax_states = 10\n").unwrap();
    let limits = c.limits.unwrap();
    assert_eq!(limits.max_states, 10);
    assert_eq!(
        limits.max_runtime_steps,
        ResourceLimits::default().max_runtime_steps
    );
}

#[test]
fn rejects_zero_budgets_and_bad_toml() {
    assert!(matches!(
        SolverConfig::from_toml_str("[limits]\nmax_states = 0\n"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        SolverConfig::from_toml_str("format = \"yaml\""),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn loads_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "format = \"json\"").unwrap();
    let c = SolverConfig::load(f.path()).unwrap();
    assert_eq!(c.format, OutputFormat::Json);

    assert!(matches!(
        SolverConfig::load("/definitely/not/here.toml"),
        Err(ConfigError::Io(_))
    ));
}
