use ai_q::assessment::{
    calculate_result, sample_questions, ArchetypeId, Category, QuestionBank, RngSource, Totals,
    CLASSIFICATION_THRESHOLD,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// (tech, adapt, count) with both totals reachable for `count` questions.
fn totals_and_count() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=30).prop_flat_map(|count| (0..=count * 5, 0..=count * 5, Just(count)))
}

proptest! {
    #[test]
    fn sample_is_balanced_sorted_and_unique(per_category in 1usize..=51, seed in any::<u64>()) {
        let bank = QuestionBank::builtin();
        let mut random = RngSource::new(StdRng::seed_from_u64(seed));
        let questions = sample_questions(&bank, per_category, &mut random);

        prop_assert_eq!(questions.len(), per_category * 3);
        for category in Category::ALL {
            prop_assert_eq!(
                questions.iter().filter(|q| q.category == category).count(),
                per_category
            );
        }
        // strictly ascending ids also rule out duplicates
        prop_assert!(questions.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn dimension_scores_stay_in_bounds(
        (tech, adapt, count) in totals_and_count(),
        ethics in 0u32..=20,
        seed in any::<u64>(),
    ) {
        let mut random = RngSource::new(StdRng::seed_from_u64(seed));
        let result = calculate_result(Totals::new(tech, adapt, ethics), count, &mut random);
        prop_assert_eq!(result.dimension_scores.len(), 5);
        for dim in &result.dimension_scores {
            prop_assert!((20.0..=100.0).contains(&dim.value), "{} = {}", dim.label, dim.value);
        }
    }

    #[test]
    fn quadrant_follows_threshold(
        (tech, adapt, count) in totals_and_count(),
        ethics in 0u32..=20,
        seed in any::<u64>(),
    ) {
        let mut random = RngSource::new(StdRng::seed_from_u64(seed));
        let result = calculate_result(Totals::new(tech, adapt, ethics), count, &mut random);
        let max = f64::from(count * 5);
        let high_tech = 100.0 * f64::from(tech) / max >= CLASSIFICATION_THRESHOLD;
        let high_adapt = 100.0 * f64::from(adapt) / max >= CLASSIFICATION_THRESHOLD;
        let expected = match (high_tech, high_adapt) {
            (true, true) => ArchetypeId::VisionaryArchitect,
            (true, false) => ArchetypeId::TenXAchiever,
            (false, true) => ArchetypeId::AgileExplorer,
            (false, false) => ArchetypeId::HumanistStrategist,
        };
        prop_assert_eq!(result.id, expected);
    }

    #[test]
    fn zero_ethics_never_tags((tech, adapt, count) in totals_and_count(), seed in any::<u64>()) {
        let mut random = RngSource::new(StdRng::seed_from_u64(seed));
        let result = calculate_result(Totals::new(tech, adapt, 0), count, &mut random);
        prop_assert_eq!(result.tags.len(), result.template().tags.len());
        prop_assert!(!result.has_tag("High Risk Profile"));
        prop_assert!(!result.has_tag("Safety Champion"));
    }
}
