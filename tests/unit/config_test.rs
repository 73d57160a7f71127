use repolens::config::{parse_config_content, ConfigBuilder, SettingsValidator};
use repolens::models::config::{OutputFormat, PartialSettings, Settings};

#[test]
fn defaults_are_applied_when_nothing_is_set() {
    let settings = ConfigBuilder::new().build().unwrap();

    assert_eq!(settings.output_format, OutputFormat::Text);
    assert_eq!(settings.fetch_timeout_secs, 120);
    assert_eq!(settings.model, "gpt-4o-mini");
    assert_eq!(settings.history_limit, 20);
    assert!(settings.insight_enabled);
}

#[test]
fn later_sources_take_precedence() {
    let file_layer = PartialSettings {
        model: Some("file-model".to_string()),
        fetch_timeout_secs: Some(30),
        ..Default::default()
    };
    let cli_layer = PartialSettings {
        model: Some("cli-model".to_string()),
        ..Default::default()
    };

    let settings = ConfigBuilder::new()
        .merge(file_layer)
        .merge(cli_layer)
        .build()
        .unwrap();

    // The CLI layer wins for model; the file layer survives for timeout
    assert_eq!(settings.model, "cli-model");
    assert_eq!(settings.fetch_timeout_secs, 30);
}

#[test]
fn toml_content_maps_to_partial_settings() {
    let partial = parse_config_content(
        r#"
output_format = "json"
fetch_timeout_secs = 60
insight_enabled = false
model = "local-model"
history_limit = 5
"#,
    )
    .unwrap();

    assert_eq!(partial.output_format, Some(OutputFormat::Json));
    assert_eq!(partial.fetch_timeout_secs, Some(60));
    assert_eq!(partial.insight_enabled, Some(false));
    assert_eq!(partial.model.as_deref(), Some("local-model"));
    assert_eq!(partial.history_limit, Some(5));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    assert!(parse_config_content("output_format = [broken").is_err());
}

#[test]
fn zero_timeout_is_rejected() {
    let settings = Settings {
        fetch_timeout_secs: 0,
        ..Default::default()
    };
    assert!(SettingsValidator::validate(&settings).is_err());
}

#[test]
fn empty_model_is_rejected() {
    let settings = Settings {
        model: "  ".to_string(),
        ..Default::default()
    };
    assert!(SettingsValidator::validate(&settings).is_err());
}
