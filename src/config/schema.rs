use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Terminal color scheme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Application configuration.
///
/// Every field is optional; an absent file means all defaults.
///
/// Example YAML:
/// ```yaml
/// name: "Priya Sharma"
/// questions_per_category: 4
/// analysis_delay: "3s"
/// share_url: "https://ai-q.in"
/// certificate_dir: "~/Pictures"
/// theme: auto
/// log_level: info
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Participant name pre-filled on the landing screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Questions drawn from each category (default: 4)
    #[serde(default = "default_questions_per_category")]
    pub questions_per_category: usize,

    /// Pause before the result is revealed, humantime syntax (default: "3s")
    #[serde(default = "default_analysis_delay")]
    pub analysis_delay: String,

    /// Link appended to share texts
    #[serde(default = "default_share_url")]
    pub share_url: String,

    /// Where exported certificates are written (default: current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_dir: Option<PathBuf>,

    /// Alternative question bank (YAML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_bank: Option<PathBuf>,

    #[serde(default)]
    pub theme: ThemeMode,

    /// Log filter used when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_questions_per_category() -> usize {
    crate::assessment::DEFAULT_PER_CATEGORY
}

fn default_analysis_delay() -> String {
    "3s".to_string()
}

fn default_share_url() -> String {
    "https://ai-q.in".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            questions_per_category: default_questions_per_category(),
            analysis_delay: default_analysis_delay(),
            share_url: default_share_url(),
            certificate_dir: None,
            question_bank: None,
            theme: ThemeMode::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Parsed analysis delay, falling back to the default on bad input.
    /// `validate_config` reports bad input at startup.
    pub fn analysis_delay(&self) -> std::time::Duration {
        humantime::parse_duration(&self.analysis_delay)
            .unwrap_or(std::time::Duration::from_secs(3))
    }

    /// Expand `~` in the configured paths.
    pub(crate) fn expand_paths(&mut self) {
        if let Some(dir) = &mut self.certificate_dir {
            *dir = super::expand_home(dir);
        }
        if let Some(bank) = &mut self.question_bank {
            *bank = super::expand_home(bank);
        }
    }

    pub fn certificate_dir(&self) -> PathBuf {
        self.certificate_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
