use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::assessment::{Archetype, Category, Question};

const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Whole-number percentage; non-finite values (zero-question input) show as "n/a".
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.0}%", value)
    } else {
        "n/a".to_string()
    }
}

/// Horizontal bar for a 0-100 value.
pub fn score_bar(value: f64, width: usize) -> String {
    let ratio = if value.is_finite() {
        (value / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One question per line: "{id}. [{category}] {text}"
pub fn format_question_list(questions: &[Question], use_colors: bool) -> String {
    if questions.is_empty() {
        return "No questions found.".to_string();
    }

    let term_width = get_terminal_width();
    // id column + category column + separators
    let fixed_width = 5 + 10 + 2;

    questions
        .iter()
        .map(|q| {
            let id_str = format!("{:>3}.", q.id);
            let category = format!("[{}]", q.category);
            let category_padded = format!("{:<9}", category);
            let text = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_text(&q.text, width - fixed_width),
                Some(_) => truncate_text(&q.text, 20),
                None => q.text.to_string(),
            };

            if use_colors {
                format!(
                    "{} {} {}",
                    id_str.dimmed(),
                    colored_category(&category_padded, q.category),
                    text
                )
            } else {
                format!("{} {} {}", id_str, category_padded, text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn colored_category(text: &str, category: Category) -> String {
    match category {
        Category::Hustle => text.cyan().to_string(),
        Category::Mindset => text.magenta().to_string(),
        Category::Ethics => text.yellow().to_string(),
    }
}

/// A question with its options, weights and feedback.
pub fn format_question_detail(question: &Question, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(question.options.len() * 2 + 1);
    let header = format!("#{} [{}] {}", question.id, question.category, question.text);
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    for (i, option) in question.options.iter().enumerate() {
        let weights = match option.ethics_score {
            Some(ethics) => format!(
                "tech {}, adapt {}, ethics {}",
                option.tech_score, option.adapt_score, ethics
            ),
            None => format!("tech {}, adapt {}", option.tech_score, option.adapt_score),
        };
        if use_colors {
            lines.push(format!("  {}. {} {}", i + 1, option.text, format!("({})", weights).dimmed()));
        } else {
            lines.push(format!("  {}. {} ({})", i + 1, option.text, weights));
        }
        if !option.feedback.is_empty() {
            lines.push(format!("     {}", option.feedback));
        }
    }

    lines.join("\n")
}

/// Full textual result: title, definition, tags, description, percentages
/// and the five dimensions as bars.
pub fn format_result(archetype: &Archetype, use_colors: bool) -> String {
    let mut out = Vec::new();

    if use_colors {
        out.push(archetype.title.bold().to_string());
        out.push(archetype.definition.dimmed().to_string());
        out.push(archetype.tags.join(" · ").yellow().to_string());
    } else {
        out.push(archetype.title.clone());
        out.push(archetype.definition.clone());
        out.push(archetype.tags.join(" · "));
    }
    out.push(String::new());
    out.push(archetype.description.clone());
    out.push(String::new());

    let p = &archetype.percentages;
    out.push(format!(
        "Tech {}  Adapt {}  Ethics {}",
        format_percent(p.tech),
        format_percent(p.adapt),
        format_percent(p.ethics)
    ));

    let label_width = archetype
        .dimension_scores
        .iter()
        .map(|d| d.label.chars().count())
        .max()
        .unwrap_or(0);
    for dim in &archetype.dimension_scores {
        let bar = score_bar(dim.value, BAR_WIDTH);
        let bar = if use_colors {
            bar.green().to_string()
        } else {
            bar
        };
        out.push(format!(
            "  {:<width$}  {} {:>4}",
            dim.label,
            bar,
            format_percent(dim.value),
            width = label_width
        ));
    }

    if let Some((first, last)) = archetype.highlighted_dimensions() {
        out.push(String::new());
        out.push(format!("You excel in {} and {}.", first.label, last.label));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{all_questions, calculate_result, FixedSource, Totals};

    fn question(id: u32) -> &'static Question {
        all_questions().iter().find(|q| q.id == id).unwrap()
    }

    #[test]
    fn test_truncate_text_short() {
        assert_eq!(truncate_text("Short", 10), "Short");
    }

    #[test]
    fn test_truncate_text_exact() {
        assert_eq!(truncate_text("Exactly10!", 10), "Exactly10!");
    }

    #[test]
    fn test_truncate_text_long() {
        assert_eq!(truncate_text("This is a very long title", 10), "This is...");
    }

    #[test]
    fn test_truncate_text_unicode() {
        assert_eq!(truncate_text("नमस्ते दुनिया", 5), "नम...");
    }

    #[test]
    fn test_truncate_text_very_narrow() {
        assert_eq!(truncate_text("Hello", 2), "He");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(65.0), "65%");
        assert_eq!(format_percent(39.6), "40%");
        assert_eq!(format_percent(f64::NAN), "n/a");
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(50.0, 10), "█████░░░░░");
        assert_eq!(score_bar(100.0, 4), "████");
        assert_eq!(score_bar(140.0, 4), "████");
        assert_eq!(score_bar(f64::NAN, 4), "░░░░");
    }

    #[test]
    fn test_format_question_list_empty() {
        assert_eq!(format_question_list(&[], false), "No questions found.");
    }

    #[test]
    fn test_format_question_list_lines() {
        let questions = vec![question(1).clone(), question(2).clone()];
        let output = format_question_list(&questions, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. ["));
        assert!(lines[1].starts_with("  2. ["));
    }

    #[test]
    fn test_format_question_detail_lists_options() {
        let q = question(1);
        let output = format_question_detail(q, false);
        assert!(output.starts_with(&format!("#1 [{}]", q.category)));
        for (i, option) in q.options.iter().enumerate() {
            assert!(output.contains(&format!("  {}. {} (tech {}", i + 1, option.text, option.tech_score)));
        }
    }

    #[test]
    fn test_format_result_plain() {
        let result = calculate_result(Totals::new(52, 51, 16), 12, &mut FixedSource::zero());
        let output = format_result(&result, false);
        assert!(output.starts_with("The Visionary Architect\nHigh Tech + High Adaptability\n"));
        assert!(output.contains("Tech 87%  Adapt 85%  Ethics 80%"));
        assert!(output.contains("Risk Awareness"));
        assert!(output.ends_with("You excel in Prompting and Risk Awareness."));
    }
}
