use shuppinhyo::presentation::config::Settings;

// Single test so LOG_FORMAT is not mutated concurrently from parallel tests.
#[test]
fn given_log_format_env_when_loading_settings_then_json_flag_follows_it() {
    std::env::set_var("LOG_FORMAT", "json");
    let settings = Settings::from_env().unwrap();
    assert!(settings.logging.json_format);

    std::env::set_var("LOG_FORMAT", "pretty");
    let settings = Settings::from_env().unwrap();
    assert!(!settings.logging.json_format);

    std::env::remove_var("LOG_FORMAT");
    let settings = Settings::from_env().unwrap();
    assert!(!settings.logging.json_format);
}
