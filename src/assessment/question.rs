use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Highest score a single option can contribute on any dimension.
pub const MAX_OPTION_SCORE: u8 = 5;

/// Every question offers exactly this many options.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Question theme used to balance sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hustle,
    Mindset,
    Ethics,
}

impl Category {
    /// Sampling order. Display order is decided by question id afterwards.
    pub const ALL: [Category; 3] = [Category::Hustle, Category::Mindset, Category::Ethics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hustle => "hustle",
            Category::Mindset => "mindset",
            Category::Ethics => "ethics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hustle" => Ok(Category::Hustle),
            "mindset" => Ok(Category::Mindset),
            "ethics" => Ok(Category::Ethics),
            other => Err(format!(
                "unknown category '{}' (expected hustle, mindset or ethics)",
                other
            )),
        }
    }
}

/// One selectable answer with its weights.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerOption {
    pub text: Cow<'static, str>,
    pub tech_score: u8,
    pub adapt_score: u8,
    /// Absent on options that carry no ethics dimension; counts as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethics_score: Option<u8>,
    /// Short remark shown after the option is chosen. Never affects scoring.
    #[serde(default)]
    pub feedback: Cow<'static, str>,
}

impl AnswerOption {
    /// Ethics contribution, treating an absent score as zero.
    pub fn ethics(&self) -> u8 {
        self.ethics_score.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: u32,
    pub category: Category,
    pub text: Cow<'static, str>,
    /// Display order, not significance order.
    pub options: [AnswerOption; OPTIONS_PER_QUESTION],
}

impl Question {
    /// Whether any option of this question scores on the ethics dimension.
    pub fn carries_ethics(&self) -> bool {
        self.options.iter().any(|o| o.ethics_score.is_some())
    }

    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(tech: u8, adapt: u8, ethics: Option<u8>) -> AnswerOption {
        AnswerOption {
            text: Cow::Borrowed("option"),
            tech_score: tech,
            adapt_score: adapt,
            ethics_score: ethics,
            feedback: Cow::Borrowed(""),
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("hustle".parse::<Category>().unwrap(), Category::Hustle);
        assert_eq!(" Ethics ".parse::<Category>().unwrap(), Category::Ethics);
        assert!("other".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }

    #[test]
    fn test_absent_ethics_counts_as_zero() {
        assert_eq!(opt(1, 1, None).ethics(), 0);
        assert_eq!(opt(1, 1, Some(4)).ethics(), 4);
    }

    #[test]
    fn test_carries_ethics() {
        let mut question = Question {
            id: 1,
            category: Category::Mindset,
            text: Cow::Borrowed("q"),
            options: [opt(1, 1, None), opt(2, 2, None), opt(3, 3, None), opt(4, 4, None)],
        };
        assert!(!question.carries_ethics());

        question.options[3].ethics_score = Some(0);
        assert!(question.carries_ethics());
    }

    #[test]
    fn test_question_yaml_parse() {
        let yaml = r#"
id: 7
category: ethics
text: "Pick one"
options:
  - { text: "a", tech_score: 1, adapt_score: 2, ethics_score: 3, feedback: "fa" }
  - { text: "b", tech_score: 2, adapt_score: 2 }
  - { text: "c", tech_score: 3, adapt_score: 2 }
  - { text: "d", tech_score: 4, adapt_score: 2 }
"#;
        let question: Question = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(question.id, 7);
        assert_eq!(question.category, Category::Ethics);
        assert_eq!(question.options[0].ethics_score, Some(3));
        assert_eq!(question.options[1].ethics_score, None);
        assert_eq!(question.options[1].feedback, "");
    }

    #[test]
    fn test_question_with_three_options_rejected() {
        let yaml = r#"
id: 7
category: hustle
text: "Pick one"
options:
  - { text: "a", tech_score: 1, adapt_score: 2 }
  - { text: "b", tech_score: 2, adapt_score: 2 }
  - { text: "c", tech_score: 3, adapt_score: 2 }
"#;
        assert!(serde_saphyr::from_str::<Question>(yaml).is_err());
    }
}
