use super::archetype::{Archetype, ArchetypeId, DimensionScore};
use super::question::{AnswerOption, MAX_OPTION_SCORE};
use super::random::{RandomSource, RngSource};
use serde::Serialize;

/// Absolute cutoff on both tech and adapt percentages.
pub const CLASSIFICATION_THRESHOLD: f64 = 65.0;

/// Ethics is always normalized against this many questions, whatever was
/// actually answered. Matches the default 4-per-category sampling.
pub const ETHICS_QUESTIONS: u32 = 4;

pub const HIGH_RISK_TAG: &str = "High Risk Profile";
pub const SAFETY_CHAMPION_TAG: &str = "Safety Champion";

pub const DIMENSION_LABELS: [&str; 5] = [
    "Prompting",
    "Tool Stack",
    "Automation",
    "Critical Thinking",
    "Risk Awareness",
];

const HIGH_BAND: f64 = 80.0;
const LOW_BAND: f64 = 40.0;
const JITTER_SPREAD: f64 = 7.0;
const DIMENSION_FLOOR: f64 = 20.0;
const DIMENSION_CEILING: f64 = 100.0;

const ELITE_TECH: &str = "Your technical proficiency is elite. You're likely early to adopt new frameworks like RAG and Agentic AI.";
const BASIC_TECH: &str = "You're currently using AI for basic tasks. There's a huge opportunity to automate your deeper workflows.";
const GROWTH_MINDSET: &str = "Your 'Growth Mindset' is your superpower. You see AI as a partner, not a threat.";
const LEGACY_WORKFLOWS: &str = "You might be holding onto legacy workflows too tightly. Try experimenting with one small AI automation this week.";
const RISK_WARNING: &str = "Critical Note: Your Risk Awareness is low. In the Indian corporate landscape, data privacy (DPDP Act) and bias are major legal risks. Focus on safe AI usage.";
const SAFETY_COMMENDATION: &str = "Your strong ethical judgment makes you a 'Safety Champion'. You're the kind of leader India needs to deploy AI responsibly.";

/// Running raw totals of the chosen options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub tech: u32,
    pub adapt: u32,
    pub ethics: u32,
}

impl Totals {
    pub fn new(tech: u32, adapt: u32, ethics: u32) -> Self {
        Self { tech, adapt, ethics }
    }

    /// Add one chosen option. Ethics is summed regardless of the question's category.
    pub fn add(&mut self, option: &AnswerOption) {
        self.tech += u32::from(option.tech_score);
        self.adapt += u32::from(option.adapt_score);
        self.ethics += u32::from(option.ethics());
    }

    pub fn from_answers<'a>(answers: impl IntoIterator<Item = &'a AnswerOption>) -> Self {
        answers.into_iter().fold(Self::default(), |mut totals, option| {
            totals.add(option);
            totals
        })
    }
}

/// Raw totals normalized to 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Percentages {
    pub tech: f64,
    pub adapt: f64,
    pub ethics: f64,
}

impl Percentages {
    /// A zero `answered` count yields non-finite tech/adapt values; no guard here.
    pub fn compute(totals: &Totals, answered: u32) -> Self {
        let max_per_stat = f64::from(answered) * f64::from(MAX_OPTION_SCORE);
        let max_ethics = f64::from(ETHICS_QUESTIONS) * f64::from(MAX_OPTION_SCORE);
        Self {
            tech: 100.0 * f64::from(totals.tech) / max_per_stat,
            adapt: 100.0 * f64::from(totals.adapt) / max_per_stat,
            ethics: 100.0 * f64::from(totals.ethics) / max_ethics,
        }
    }
}

/// Quadrant classification on the fixed threshold.
pub fn classify(percentages: &Percentages) -> ArchetypeId {
    let high_tech = percentages.tech >= CLASSIFICATION_THRESHOLD;
    let high_adapt = percentages.adapt >= CLASSIFICATION_THRESHOLD;
    match (high_tech, high_adapt) {
        (true, true) => ArchetypeId::VisionaryArchitect,
        (true, false) => ArchetypeId::TenXAchiever,
        (false, true) => ArchetypeId::AgileExplorer,
        (false, false) => ArchetypeId::HumanistStrategist,
    }
}

/// Score a completed assessment.
///
/// `answered` is the number of questions actually presented. The result is a
/// fresh copy of the matched template with personalized insight text
/// prefixed to its description, ethics tags appended and five radar
/// dimension scores attached.
pub fn calculate_result(
    totals: Totals,
    answered: u32,
    random: &mut impl RandomSource,
) -> Archetype {
    let percentages = Percentages::compute(&totals, answered);
    let id = classify(&percentages);
    let mut result = id.template().instantiate();

    let mut insights = Vec::new();
    if percentages.tech > HIGH_BAND {
        insights.push(ELITE_TECH);
    } else if percentages.tech < LOW_BAND {
        insights.push(BASIC_TECH);
    }

    if percentages.adapt > HIGH_BAND {
        insights.push(GROWTH_MINDSET);
    } else if percentages.adapt < LOW_BAND {
        insights.push(LEGACY_WORKFLOWS);
    }

    // Zero ethics skips the branch entirely, even when options with zero were chosen.
    if totals.ethics > 0 {
        if percentages.ethics < LOW_BAND {
            insights.push(RISK_WARNING);
            result.tags.push(HIGH_RISK_TAG.to_string());
        } else if percentages.ethics > HIGH_BAND {
            insights.push(SAFETY_COMMENDATION);
            result.tags.push(SAFETY_CHAMPION_TAG.to_string());
        }
    }

    if !insights.is_empty() {
        result.description = format!("{} {}", insights.join(" "), result.description);
    }

    result.dimension_scores = dimension_scores(&percentages, &totals, random);
    result.percentages = percentages;

    tracing::debug!(
        tech = percentages.tech,
        adapt = percentages.adapt,
        ethics = percentages.ethics,
        archetype = %id,
        insights = insights.len(),
        "classified assessment"
    );

    result
}

/// Engine entry point with primitive inputs and the thread-local random source.
pub fn score(tech: u32, adapt: u32, ethics: u32, answered: u32) -> Archetype {
    calculate_result(
        Totals::new(tech, adapt, ethics),
        answered,
        &mut RngSource::thread(),
    )
}

/// Radar values: three tech-derived and one adapt-derived value, each with an
/// independent jitter, plus an unjittered risk value. All clamped to 20-100.
pub fn dimension_scores(
    percentages: &Percentages,
    totals: &Totals,
    random: &mut impl RandomSource,
) -> Vec<DimensionScore> {
    let risk = if totals.ethics > 0 {
        percentages.ethics
    } else {
        percentages.adapt
    };
    let bases = [
        percentages.tech + random.jitter(JITTER_SPREAD),
        percentages.tech + random.jitter(JITTER_SPREAD),
        percentages.tech + random.jitter(JITTER_SPREAD),
        percentages.adapt + random.jitter(JITTER_SPREAD),
        risk,
    ];

    DIMENSION_LABELS
        .into_iter()
        .zip(bases)
        .map(|(label, value)| DimensionScore {
            label,
            value: clamp_dimension(value),
        })
        .collect()
}

/// NaN maps to the floor so a degenerate input still renders.
fn clamp_dimension(value: f64) -> f64 {
    value.max(DIMENSION_FLOOR).min(DIMENSION_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::random::FixedSource;

    fn run(tech: u32, adapt: u32, ethics: u32, answered: u32) -> Archetype {
        calculate_result(
            Totals::new(tech, adapt, ethics),
            answered,
            &mut FixedSource::zero(),
        )
    }

    #[test]
    fn test_boundary_exactly_65_is_high() {
        let result = run(39, 39, 0, 12);
        assert_eq!(result.percentages.tech, 65.0);
        assert_eq!(result.percentages.adapt, 65.0);
        assert_eq!(result.id, ArchetypeId::VisionaryArchitect);
    }

    #[test]
    fn test_just_below_boundary() {
        let result = run(38, 39, 0, 12);
        assert!(result.percentages.tech < 65.0);
        assert_eq!(result.id, ArchetypeId::AgileExplorer);
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(run(50, 50, 0, 12).id, ArchetypeId::VisionaryArchitect);
        assert_eq!(run(50, 20, 0, 12).id, ArchetypeId::TenXAchiever);
        assert_eq!(run(20, 50, 0, 12).id, ArchetypeId::AgileExplorer);
        assert_eq!(run(20, 20, 0, 12).id, ArchetypeId::HumanistStrategist);
    }

    #[test]
    fn test_no_insight_keeps_base_description() {
        // 60% / 60%: inside both middle bands
        let result = run(36, 36, 0, 12);
        assert_eq!(result.id, ArchetypeId::HumanistStrategist);
        assert_eq!(result.description, result.template().description);
    }

    #[test]
    fn test_both_insights_prefixed_in_order() {
        // 100% tech, 30% adapt
        let result = run(60, 18, 0, 12);
        assert_eq!(result.id, ArchetypeId::TenXAchiever);
        let expected = format!(
            "{} {} {}",
            ELITE_TECH,
            LEGACY_WORKFLOWS,
            result.template().description
        );
        assert_eq!(result.description, expected);
    }

    #[test]
    fn test_tech_adapt_band_edges_add_nothing() {
        // 48/60 = 80%, 24/60 = 40%: neither band is inclusive
        for (tech, adapt) in [(48, 48), (24, 24), (48, 24), (24, 48)] {
            let result = run(tech, adapt, 0, 12);
            assert_eq!(
                result.description,
                result.template().description,
                "tech={} adapt={}",
                tech,
                adapt
            );
        }
    }

    #[test]
    fn test_low_tech_high_adapt_insights() {
        let result = run(18, 54, 0, 12);
        assert!(result.description.starts_with(BASIC_TECH));
        assert!(result.description.contains(GROWTH_MINDSET));
    }

    #[test]
    fn test_zero_ethics_never_tags() {
        for (tech, adapt) in [(0, 0), (60, 60), (10, 60), (60, 10)] {
            let result = run(tech, adapt, 0, 12);
            assert!(!result.has_tag(HIGH_RISK_TAG));
            assert!(!result.has_tag(SAFETY_CHAMPION_TAG));
        }
    }

    #[test]
    fn test_ethics_band_edges_add_nothing() {
        // 8/20 = 40%, 16/20 = 80%
        for ethics in [8, 16] {
            let result = run(36, 36, ethics, 12);
            assert_eq!(result.tags.len(), 3, "ethics={}", ethics);
            assert_eq!(result.description, result.template().description);
        }
    }

    #[test]
    fn test_low_ethics_high_risk() {
        let result = run(36, 36, 7, 12);
        assert!(result.has_tag(HIGH_RISK_TAG));
        assert_eq!(result.tags.last().unwrap(), HIGH_RISK_TAG);
        assert!(result.description.starts_with(RISK_WARNING));
    }

    #[test]
    fn test_high_ethics_safety_champion() {
        let result = run(36, 36, 17, 12);
        assert!(result.has_tag(SAFETY_CHAMPION_TAG));
        assert!(result.description.starts_with(SAFETY_COMMENDATION));
    }

    #[test]
    fn test_ethics_denominator_is_fixed() {
        // 24 questions answered, ethics still normalized against 4 questions
        let result = run(60, 60, 10, 24);
        assert_eq!(result.percentages.ethics, 50.0);
        assert_eq!(result.percentages.tech, 50.0);
    }

    #[test]
    fn test_dimension_scores_without_jitter() {
        let result = run(30, 42, 0, 12);
        let values: Vec<f64> = result.dimension_scores.iter().map(|d| d.value).collect();
        assert_eq!(values, vec![50.0, 50.0, 50.0, 70.0, 70.0]);
        let labels: Vec<&str> = result.dimension_scores.iter().map(|d| d.label).collect();
        assert_eq!(labels, DIMENSION_LABELS.to_vec());
    }

    #[test]
    fn test_dimension_jitter_applied_in_order() {
        let mut random = FixedSource::new([1.0, -2.0, 3.0, -4.0]);
        let result = calculate_result(Totals::new(30, 42, 10), 12, &mut random);
        let values: Vec<f64> = result.dimension_scores.iter().map(|d| d.value).collect();
        assert_eq!(values, vec![51.0, 48.0, 53.0, 66.0, 50.0]);
    }

    #[test]
    fn test_dimension_scores_clamped() {
        let mut random = FixedSource::new([7.0]);
        let high = calculate_result(Totals::new(60, 60, 20), 12, &mut random);
        assert!(high.dimension_scores.iter().all(|d| d.value == 100.0));

        let mut random = FixedSource::new([-7.0]);
        let low = calculate_result(Totals::new(0, 0, 0), 12, &mut random);
        assert!(low.dimension_scores.iter().all(|d| d.value == 20.0));
    }

    #[test]
    fn test_zero_answered_is_degenerate_but_total() {
        let result = run(0, 0, 0, 0);
        assert!(result.percentages.tech.is_nan());
        assert_eq!(result.id, ArchetypeId::HumanistStrategist);
        assert!(result.dimension_scores.iter().all(|d| d.value == 20.0));
    }

    #[test]
    fn test_repeated_results_do_not_share_state() {
        let first = run(60, 60, 20, 12);
        let second = run(60, 60, 2, 12);
        assert_eq!(first.id, second.id);
        assert!(first.has_tag(SAFETY_CHAMPION_TAG));
        assert!(!first.has_tag(HIGH_RISK_TAG));
        assert!(second.has_tag(HIGH_RISK_TAG));
        assert!(!second.has_tag(SAFETY_CHAMPION_TAG));
        assert!(!first.description.contains(RISK_WARNING));
    }

    #[test]
    fn test_totals_fold_sums_ethics_across_categories() {
        let option = |tech, adapt, ethics| AnswerOption {
            text: "x".into(),
            tech_score: tech,
            adapt_score: adapt,
            ethics_score: ethics,
            feedback: "".into(),
        };
        let answers = [option(5, 4, None), option(3, 2, Some(4)), option(1, 1, Some(2))];
        assert_eq!(Totals::from_answers(&answers), Totals::new(9, 7, 6));
    }

    #[test]
    fn test_score_uses_thread_random() {
        let result = score(39, 39, 0, 12);
        assert_eq!(result.id, ArchetypeId::VisionaryArchitect);
        assert!(result
            .dimension_scores
            .iter()
            .all(|d| (20.0..=100.0).contains(&d.value)));
    }
}
