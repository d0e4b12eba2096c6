pub mod init;
mod schema;
mod validation;

pub use schema::{Config, ThemeMode};
pub use validation::validate_config;

use crate::assessment::QuestionBank;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/ai-q/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("ai-q"))
}

/// Get the default config file path (~/.config/ai-q/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Expand a leading `~` to the home directory. Other paths are returned as-is,
/// as is `~` itself when the home directory is unknown.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/ai-q/config.yaml) and falls back to defaults when it is absent.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let mut config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;
    config.expand_paths();

    Ok(config)
}

/// The question bank selected by the config: a custom file if configured,
/// otherwise the built-in corpus.
pub fn load_question_bank(config: &Config) -> Result<QuestionBank> {
    match &config.question_bank {
        Some(path) => {
            let bank = QuestionBank::load(path)?;
            tracing::info!(path = %path.display(), questions = bank.len(), "loaded custom question bank");
            Ok(bank)
        }
        None => Ok(QuestionBank::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: \"Kavya\"\nquestions_per_category: 2").unwrap();
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.name.as_deref(), Some("Kavya"));
        assert_eq!(config.questions_per_category, 2);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "questions_per_category: [oops").unwrap();
        let err = load_config(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home(Path::new("~/Pictures")), home.join("Pictures"));
        assert_eq!(expand_home(Path::new("~")), home);
        assert_eq!(expand_home(Path::new("/tmp/certs")), PathBuf::from("/tmp/certs"));
        assert_eq!(expand_home(Path::new("certs/~")), PathBuf::from("certs/~"));
        assert_eq!(expand_home(Path::new("~other/x")), PathBuf::from("~other/x"));
    }

    #[test]
    fn test_load_config_expands_home_paths() {
        let home = dirs::home_dir().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "certificate_dir: \"~/Pictures\"\nquestion_bank: \"~/banks/custom.yaml\""
        )
        .unwrap();
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.certificate_dir(), home.join("Pictures"));
        assert_eq!(config.question_bank, Some(home.join("banks/custom.yaml")));
    }

    #[test]
    fn test_default_bank_is_builtin() {
        let bank = load_question_bank(&Config::default()).unwrap();
        assert_eq!(bank, QuestionBank::builtin());
    }

    #[test]
    fn test_custom_bank_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
questions:
  - id: 1
    category: hustle
    text: "Q"
    options:
      - {{ text: "a", tech_score: 1, adapt_score: 1 }}
      - {{ text: "b", tech_score: 2, adapt_score: 2 }}
      - {{ text: "c", tech_score: 3, adapt_score: 3 }}
      - {{ text: "d", tech_score: 4, adapt_score: 4 }}
"#
        )
        .unwrap();
        let config = Config {
            question_bank: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let bank = load_question_bank(&config).unwrap();
        assert_eq!(bank.len(), 1);
    }
}
