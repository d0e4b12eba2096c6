//! Centralized theme module for TUI color constants and styles

use crate::config::ThemeMode;
use ratatui::prelude::*;

/// Concrete palette after `auto` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub title_style: Style,
    pub accent: Color,
    pub muted: Color,
    pub text: Color,

    // Quiz
    pub gauge_filled: Color,
    pub gauge_empty: Color,
    pub option_selected: Style,
    pub option_key: Color,

    // Result
    pub archetype_title: Style,
    pub tag_color: Color,
    pub radar_grid: Color,
    pub radar_shape: Color,
    pub radar_label: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    /// Dark theme palette: navy-and-amber certificate colors
    pub fn dark() -> Self {
        Self {
            title_style: Style::new().fg(Color::Rgb(245, 158, 11)).bold(),
            accent: Color::Rgb(245, 158, 11),
            muted: Color::Gray,
            text: Color::White,
            gauge_filled: Color::Rgb(79, 70, 229),
            gauge_empty: Color::Indexed(236),
            option_selected: Style::new().fg(Color::Black).bg(Color::Rgb(245, 158, 11)).bold(),
            option_key: Color::Rgb(245, 158, 11),
            archetype_title: Style::new().fg(Color::Rgb(147, 51, 234)).bold(),
            tag_color: Color::Rgb(245, 158, 11),
            radar_grid: Color::Indexed(238),
            radar_shape: Color::Rgb(129, 120, 255),
            radar_label: Color::Gray,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Rgb(245, 158, 11),
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Rgb(245, 158, 11),
            popup_title: Style::new().fg(Color::Rgb(245, 158, 11)).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    /// Light theme palette: darker accents that stay readable on white
    pub fn light() -> Self {
        Self {
            title_style: Style::new().fg(Color::Rgb(180, 83, 9)).bold(),
            accent: Color::Rgb(180, 83, 9),
            muted: Color::DarkGray,
            text: Color::Black,
            gauge_filled: Color::Rgb(79, 70, 229),
            gauge_empty: Color::Indexed(253),
            option_selected: Style::new().fg(Color::White).bg(Color::Rgb(79, 70, 229)).bold(),
            option_key: Color::Rgb(79, 70, 229),
            archetype_title: Style::new().fg(Color::Rgb(126, 34, 206)).bold(),
            tag_color: Color::Rgb(180, 83, 9),
            radar_grid: Color::Indexed(250),
            radar_shape: Color::Rgb(79, 70, 229),
            radar_label: Color::DarkGray,
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Rgb(79, 70, 229),
            flash_success: Color::Rgb(21, 128, 61),
            flash_error: Color::Rgb(185, 28, 28),
            popup_border: Color::Rgb(79, 70, 229),
            popup_title: Style::new().fg(Color::Rgb(79, 70, 229)).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}

/// Resolve the configured mode to a concrete theme. `auto` asks the terminal
/// for its background luma and falls back to dark when it can't tell.
pub fn resolve_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Light => Theme::Light,
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) => theme_for_luma(luma),
            Err(e) => {
                tracing::debug!(error = %e, "could not detect terminal background");
                Theme::Dark
            }
        },
    }
}

fn theme_for_luma(luma: f32) -> Theme {
    if luma > 0.6 {
        Theme::Light
    } else {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes() {
        assert_eq!(resolve_theme(ThemeMode::Dark), Theme::Dark);
        assert_eq!(resolve_theme(ThemeMode::Light), Theme::Light);
    }

    #[test]
    fn test_luma_threshold() {
        assert_eq!(theme_for_luma(0.9), Theme::Light);
        assert_eq!(theme_for_luma(0.1), Theme::Dark);
        assert_eq!(theme_for_luma(0.6), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeColors::dark().text, ThemeColors::light().text);
    }
}
