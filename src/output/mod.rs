pub mod formatter;

pub use formatter::{
    format_percent, format_question_detail, format_question_list, format_result, score_bar,
    should_use_colors, truncate_text,
};

use serde::Serialize;

/// Output format for the non-interactive subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pretty JSON for `--format json`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
