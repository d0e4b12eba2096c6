use super::bank::QuestionBank;
use super::question::{Category, Question};
use super::random::{RandomSource, RngSource};

/// Questions drawn from each category for a standard assessment.
pub const DEFAULT_PER_CATEGORY: usize = 4;

/// Draw `per_category` questions from every category without replacement and
/// return them ordered by ascending id.
///
/// A category with fewer questions than requested contributes all of them.
/// The bank is never modified.
pub fn sample_questions(
    bank: &QuestionBank,
    per_category: usize,
    random: &mut impl RandomSource,
) -> Vec<Question> {
    let mut selected = Vec::with_capacity(per_category * Category::ALL.len());

    for category in Category::ALL {
        let mut pool: Vec<&Question> = bank.by_category(category).collect();
        if pool.len() < per_category {
            tracing::warn!(
                %category,
                available = pool.len(),
                requested = per_category,
                "category has fewer questions than requested"
            );
        }
        random.shuffle(&mut pool);
        selected.extend(pool.into_iter().take(per_category).cloned());
    }

    // id order, not category order, is the presentation order
    selected.sort_by_key(|q| q.id);

    tracing::debug!(
        count = selected.len(),
        per_category,
        "sampled assessment questions"
    );
    selected
}

/// Sample from the built-in bank with the thread-local random source.
pub fn sample(per_category: usize) -> Vec<Question> {
    sample_questions(&QuestionBank::builtin(), per_category, &mut RngSource::thread())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::random::FixedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn count_by_category(questions: &[Question]) -> HashMap<Category, usize> {
        let mut counts = HashMap::new();
        for q in questions {
            *counts.entry(q.category).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_default_sample_is_balanced_and_sorted() {
        let questions = sample(DEFAULT_PER_CATEGORY);
        assert_eq!(questions.len(), 12);

        let counts = count_by_category(&questions);
        for category in Category::ALL {
            assert_eq!(counts[&category], 4);
        }
        assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_sample_without_replacement() {
        let bank = QuestionBank::builtin();
        let mut random = RngSource::new(StdRng::seed_from_u64(99));
        let questions = sample_questions(&bank, 51, &mut random);
        let ids: HashSet<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions.len());
        assert_eq!(questions.len(), 153);
    }

    #[test]
    fn test_oversized_request_degrades_gracefully() {
        let bank = QuestionBank::builtin();
        let questions = sample_questions(&bank, 60, &mut FixedSource::zero());
        let counts = count_by_category(&questions);
        assert_eq!(counts[&Category::Hustle], 55);
        assert_eq!(counts[&Category::Mindset], 51);
        assert_eq!(counts[&Category::Ethics], 51);
    }

    #[test]
    fn test_zero_per_category_is_empty() {
        assert!(sample(0).is_empty());
    }

    #[test]
    fn test_fixed_source_takes_first_in_authoring_order() {
        let bank = QuestionBank::builtin();
        let questions = sample_questions(&bank, 1, &mut FixedSource::zero());
        let expected: Vec<u32> = {
            let mut ids: Vec<u32> = Category::ALL
                .iter()
                .filter_map(|c| bank.by_category(*c).next().map(|q| q.id))
                .collect();
            ids.sort_unstable();
            ids
        };
        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_sampling_does_not_touch_bank() {
        let bank = QuestionBank::builtin();
        let before = bank.clone();
        let mut random = RngSource::new(StdRng::seed_from_u64(3));
        let _ = sample_questions(&bank, 4, &mut random);
        assert_eq!(bank, before);
    }

    #[test]
    fn test_every_question_eventually_sampled() {
        let bank = QuestionBank::builtin();
        let mut random = RngSource::new(StdRng::seed_from_u64(2024));
        let mut seen = HashSet::new();
        for _ in 0..400 {
            for q in sample_questions(&bank, 4, &mut random) {
                seen.insert(q.id);
            }
        }
        assert_eq!(seen.len(), bank.len());
    }
}
