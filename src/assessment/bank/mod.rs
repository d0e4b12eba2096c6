mod builtin;

use super::question::{Category, Question};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// The full compiled-in corpus.
pub fn all_questions() -> &'static [Question] {
    builtin::QUESTIONS
}

/// On-disk layout of an alternative bank.
///
/// Example YAML:
/// ```yaml
/// questions:
///   - id: 1
///     category: hustle
///     text: "How do you summarize a long report?"
///     options:
///       - { text: "Ask an LLM for the top 5 points", tech_score: 5, adapt_score: 4, feedback: "Nice." }
///       - { text: "Read it all", tech_score: 1, adapt_score: 2 }
///       - { text: "Skip it", tech_score: 1, adapt_score: 1 }
///       - { text: "Ask a colleague", tech_score: 2, adapt_score: 3 }
/// ```
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct BankFile {
    questions: Vec<Question>,
}

/// Read-only question corpus, either the built-in one or a user-supplied file.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Cow<'static, [Question]>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QuestionBank {
    pub fn builtin() -> Self {
        Self {
            questions: Cow::Borrowed(builtin::QUESTIONS),
        }
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Cow::Owned(questions),
        }
    }

    /// Parse a bank from YAML. Structural problems (wrong option count, unknown
    /// category) fail here; semantic checks live in `validate_bank`.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: BankFile =
            serde_saphyr::from_str(content).context("Failed to parse question bank YAML")?;
        Ok(Self::from_questions(file.questions))
    }

    /// Load a bank from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid question bank in {}", path.display()))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |q| q.category == category)
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Population of each category, in `Category::ALL` order.
    pub fn category_sizes(&self) -> [(Category, usize); 3] {
        Category::ALL.map(|category| (category, self.by_category(category).count()))
    }

    /// Largest per-category count that `sample_questions` can fully satisfy.
    pub fn max_per_category(&self) -> usize {
        self.category_sizes()
            .iter()
            .map(|(_, size)| *size)
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_size_and_categories() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 157);
        assert_eq!(
            bank.category_sizes(),
            [
                (Category::Hustle, 55),
                (Category::Mindset, 51),
                (Category::Ethics, 51)
            ]
        );
        assert_eq!(bank.max_per_category(), 51);
    }

    #[test]
    fn test_builtin_ids_unique_and_positive() {
        let ids: HashSet<u32> = all_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), all_questions().len());
        assert!(!ids.contains(&0));
    }

    #[test]
    fn test_builtin_scores_within_range() {
        for question in all_questions() {
            for option in &question.options {
                assert!((1..=5).contains(&option.tech_score), "question {}", question.id);
                assert!((1..=5).contains(&option.adapt_score), "question {}", question.id);
                assert!(option.ethics() <= 5, "question {}", question.id);
                assert!(!option.feedback.is_empty(), "question {}", question.id);
            }
        }
    }

    #[test]
    fn test_builtin_ethics_questions_carry_ethics() {
        let bank = QuestionBank::builtin();
        assert!(bank.by_category(Category::Ethics).all(Question::carries_ethics));
    }

    #[test]
    fn test_find() {
        let bank = QuestionBank::builtin();
        let question = bank.find(1).unwrap();
        assert_eq!(question.category, Category::Hustle);
        assert!(question.text.contains("Hinglish"));
        assert!(bank.find(10_000).is_none());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
questions:
  - id: 3
    category: mindset
    text: "Q"
    options:
      - { text: "a", tech_score: 1, adapt_score: 1 }
      - { text: "b", tech_score: 2, adapt_score: 2 }
      - { text: "c", tech_score: 3, adapt_score: 3 }
      - { text: "d", tech_score: 4, adapt_score: 4 }
"#;
        let bank = QuestionBank::from_yaml(yaml).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.by_category(Category::Mindset).count(), 1);
        assert_eq!(bank.max_per_category(), 0);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_category() {
        let yaml = r#"
questions:
  - id: 3
    category: chaos
    text: "Q"
    options:
      - { text: "a", tech_score: 1, adapt_score: 1 }
      - { text: "b", tech_score: 2, adapt_score: 2 }
      - { text: "c", tech_score: 3, adapt_score: 3 }
      - { text: "d", tech_score: 4, adapt_score: 4 }
"#;
        assert!(QuestionBank::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = QuestionBank::load(Path::new("/nonexistent/ai-q/bank.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read question bank"));
    }
}
