use super::question::{Category, Question, MAX_OPTION_SCORE};
use std::collections::HashSet;

/// Validate a question bank before use.
/// Returns all validation errors at once (not just the first).
pub fn validate_bank(questions: &[Question]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, question) in questions.iter().enumerate() {
        if question.id == 0 {
            errors.push(format!("questions[{}].id: must be a positive integer", i));
        } else if !seen_ids.insert(question.id) {
            errors.push(format!("questions[{}].id: duplicate id {}", i, question.id));
        }

        if question.text.trim().is_empty() {
            errors.push(format!("questions[{}].text: must not be empty", i));
        }

        for (j, option) in question.options.iter().enumerate() {
            if option.text.trim().is_empty() {
                errors.push(format!("questions[{}].options[{}].text: must not be empty", i, j));
            }
            if option.tech_score > MAX_OPTION_SCORE {
                errors.push(format!(
                    "questions[{}].options[{}].tech_score: {} exceeds {}",
                    i, j, option.tech_score, MAX_OPTION_SCORE
                ));
            }
            if option.adapt_score > MAX_OPTION_SCORE {
                errors.push(format!(
                    "questions[{}].options[{}].adapt_score: {} exceeds {}",
                    i, j, option.adapt_score, MAX_OPTION_SCORE
                ));
            }
            if let Some(ethics) = option.ethics_score {
                if ethics > MAX_OPTION_SCORE {
                    errors.push(format!(
                        "questions[{}].options[{}].ethics_score: {} exceeds {}",
                        i, j, ethics, MAX_OPTION_SCORE
                    ));
                }
            }
        }
    }

    for category in Category::ALL {
        if !questions.iter().any(|q| q.category == category) {
            errors.push(format!("questions: no '{}' questions", category));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::bank::all_questions;
    use crate::assessment::question::AnswerOption;
    use std::borrow::Cow;

    fn option(tech: u8) -> AnswerOption {
        AnswerOption {
            text: Cow::Borrowed("option"),
            tech_score: tech,
            adapt_score: 3,
            ethics_score: None,
            feedback: Cow::Borrowed(""),
        }
    }

    fn question(id: u32, category: Category) -> Question {
        Question {
            id,
            category,
            text: Cow::Borrowed("question"),
            options: [option(1), option(2), option(3), option(4)],
        }
    }

    fn balanced() -> Vec<Question> {
        vec![
            question(1, Category::Hustle),
            question(2, Category::Mindset),
            question(3, Category::Ethics),
        ]
    }

    #[test]
    fn test_builtin_bank_valid() {
        assert!(validate_bank(all_questions()).is_ok());
    }

    #[test]
    fn test_balanced_bank_valid() {
        assert!(validate_bank(&balanced()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut questions = balanced();
        questions[2].id = 1;
        let errors = validate_bank(&questions).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("questions[2].id: duplicate id 1"));
    }

    #[test]
    fn test_zero_id() {
        let mut questions = balanced();
        questions[0].id = 0;
        let errors = validate_bank(&questions).unwrap_err();
        assert!(errors[0].contains("questions[0].id"));
    }

    #[test]
    fn test_score_out_of_range() {
        let mut questions = balanced();
        questions[1].options[3].tech_score = 6;
        questions[1].options[0].ethics_score = Some(9);
        let errors = validate_bank(&questions).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("questions[1].options[3].tech_score")));
        assert!(errors.iter().any(|e| e.contains("questions[1].options[0].ethics_score")));
    }

    #[test]
    fn test_missing_category() {
        let questions = vec![question(1, Category::Hustle), question(2, Category::Hustle)];
        let errors = validate_bank(&questions).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("'mindset'"));
        assert!(errors[1].contains("'ethics'"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut questions = balanced();
        questions[0].text = Cow::Borrowed("  ");
        questions[0].options[1].text = Cow::Borrowed("");
        questions[2].options[2].adapt_score = 10;
        let errors = validate_bank(&questions).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
