mod export;
mod svg;

pub use export::{export_svg, EXPORT_FAILED_MESSAGE};
pub use svg::render_svg;

use crate::assessment::{Archetype, DimensionScore, RandomSource};
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_RECIPIENT: &str = "Global Professional";

const ID_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ID_SUFFIX_LEN: usize = 6;

/// Everything printed on an exported certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    /// Name as entered, trimmed; may be empty
    pub name: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub dimension_scores: Vec<DimensionScore>,
    pub date: NaiveDate,
    pub id: String,
}

impl Certificate {
    pub fn new(
        name: &str,
        archetype: &Archetype,
        date: NaiveDate,
        random: &mut impl RandomSource,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            title: archetype.title.clone(),
            description: archetype.description.clone(),
            tags: archetype.tags.clone(),
            dimension_scores: archetype.dimension_scores.clone(),
            id: certificate_id(date.year(), random),
            date,
        }
    }

    /// The name shown on the certificate.
    pub fn recipient(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_RECIPIENT
        } else {
            &self.name
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn date_text(&self) -> String {
        format_date(self.date)
    }

    pub fn file_name(&self) -> String {
        file_name(&self.name)
    }
}

/// `AIQ-<year>-XXXXXX` with six uppercase base-36 characters.
pub fn certificate_id(year: i32, random: &mut impl RandomSource) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ID_ALPHABET[random.index(ID_ALPHABET.len())]))
        .collect();
    format!("AIQ-{}-{}", year, suffix)
}

/// Long day-month-year form, e.g. "17 October 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// `AI-Q-Certificate-<name>.svg` with whitespace runs collapsed to dashes.
pub fn file_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let stem = if words.is_empty() {
        "Professional".to_string()
    } else {
        words.join("-")
    };
    format!("AI-Q-Certificate-{}.svg", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{calculate_result, FixedSource, RngSource, Totals};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn archetype() -> Archetype {
        calculate_result(Totals::new(52, 51, 16), 12, &mut FixedSource::zero())
    }

    #[test]
    fn test_certificate_id_format() {
        let mut random = RngSource::new(StdRng::seed_from_u64(11));
        let id = certificate_id(2026, &mut random);
        assert!(id.starts_with("AIQ-2026-"));
        let suffix = &id["AIQ-2026-".len()..];
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_certificate_id_fixed_source() {
        assert_eq!(certificate_id(2027, &mut FixedSource::zero()), "AIQ-2027-ZZZZZZ");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date()), "17 October 2026");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()),
            "5 March 2026"
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("Priya  Sharma"), "AI-Q-Certificate-Priya-Sharma.svg");
        assert_eq!(file_name(" Ravi "), "AI-Q-Certificate-Ravi.svg");
        assert_eq!(file_name("   "), "AI-Q-Certificate-Professional.svg");
    }

    #[test]
    fn test_blank_name_uses_default_recipient() {
        let cert = Certificate::new("  ", &archetype(), date(), &mut FixedSource::zero());
        assert_eq!(cert.recipient(), DEFAULT_RECIPIENT);
        assert_eq!(cert.file_name(), "AI-Q-Certificate-Professional.svg");
    }

    #[test]
    fn test_certificate_copies_result() {
        let result = archetype();
        let cert = Certificate::new("Anika Rao", &result, date(), &mut FixedSource::zero());
        assert_eq!(cert.recipient(), "Anika Rao");
        assert_eq!(cert.title, result.title);
        assert_eq!(cert.tags, result.tags);
        assert_eq!(cert.dimension_scores.len(), 5);
        assert_eq!(cert.year(), 2026);
        assert_eq!(cert.id, "AIQ-2026-ZZZZZZ");
    }
}
