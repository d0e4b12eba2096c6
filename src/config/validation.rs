use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.questions_per_category == 0 {
        errors.push("questions_per_category: must be at least 1".to_string());
    }

    if let Err(e) = humantime::parse_duration(&config.analysis_delay) {
        errors.push(format!(
            "analysis_delay: invalid duration '{}' - {}",
            config.analysis_delay, e
        ));
    }

    if !(config.share_url.starts_with("https://") || config.share_url.starts_with("http://")) {
        errors.push(format!(
            "share_url: '{}' must start with http:// or https://",
            config.share_url
        ));
    }

    if config.log_level.trim().is_empty() {
        errors.push("log_level: must not be empty".to_string());
    }

    if let Some(name) = &config.name {
        if name.trim().is_empty() {
            errors.push("name: must not be blank when set".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
