use super::*;

#[test]
fn default_config_matches_the_original_deployment() {
    let config = Config::default();

    assert_eq!(config.target_process, "msedge.exe");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.poll_interval_ms, 500);
    assert_eq!(config.rule.len(), 2);
    assert_eq!(config.rule[0].title_pattern, "*Grafana");
    assert_eq!(config.rule[0].monitor, 1);
    assert_eq!(config.rule[1].title_pattern, "NOC SCC*");
    assert_eq!(config.rule[1].monitor, 0);
}

#[test]
fn partial_toml_uses_defaults_for_missing_keys() {
    let config: Config = toml::from_str("timeout_secs = 30").unwrap();

    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.target_process, "msedge.exe");
    assert_eq!(config.rule.len(), 2);
}

#[test]
fn rules_parse_as_array_of_tables_in_order() {
    let content = r#"
        [[rule]]
        title_pattern = "Ops*"
        monitor = 0

        [[rule]]
        title_pattern = "*Alerts"
        monitor = 2
    "#;
    let config: Config = toml::from_str(content).unwrap();

    assert_eq!(config.rule.len(), 2);
    assert_eq!(config.rule[0].title_pattern, "Ops*");
    assert_eq!(config.rule[1].monitor, 2);
}

#[test]
fn validate_clamps_timing_values() {
    let mut config = Config {
        timeout_secs: 0,
        poll_interval_ms: 1,
        ..Default::default()
    };
    config.validate();

    assert_eq!(config.timeout_secs, 1);
    assert_eq!(config.poll_interval_ms, 50);
}

#[test]
fn validate_drops_rules_with_invalid_patterns() {
    let mut config = Config {
        rule: vec![
            PlacementRule {
                title_pattern: "[unclosed".into(),
                monitor: 0,
            },
            PlacementRule {
                title_pattern: "*Grafana".into(),
                monitor: 1,
            },
        ],
        ..Default::default()
    };
    config.validate();

    assert_eq!(config.rule.len(), 1);
    assert_eq!(config.rule[0].title_pattern, "*Grafana");
}

#[test]
fn generated_template_parses_back_into_defaults() {
    let config: Config = toml::from_str(&template::generate_config()).unwrap();

    assert_eq!(config.target_process, "msedge.exe");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.rule.len(), 2);
    assert_eq!(
        config.launch_script.as_deref(),
        Some(std::path::Path::new("open_browser.ps1"))
    );
}

#[test]
fn relative_launch_script_resolves_under_config_dir() {
    let config = Config {
        launch_script: Some("open_browser.ps1".into()),
        ..Default::default()
    };

    let path = config.launch_script_path().unwrap();
    assert!(path.ends_with(".config/dashwall/open_browser.ps1"));
}
