use std::borrow::Cow;

use ai_q::assessment::{
    sample_questions, score, validate_bank, AnswerOption, ArchetypeId, AssessmentSession,
    Category, FixedSource, Question, QuestionBank,
};
use ai_q::certificate::{export_svg, Certificate};
use ai_q::share::{share_url, SharePlatform};
use chrono::NaiveDate;

fn option(tech: u8, adapt: u8, ethics: Option<u8>) -> AnswerOption {
    AnswerOption {
        text: Cow::Owned(format!("t{} a{} e{:?}", tech, adapt, ethics)),
        tech_score: tech,
        adapt_score: adapt,
        ethics_score: ethics,
        feedback: Cow::Borrowed("Noted."),
    }
}

/// Four questions per category. Option 0 maxes every dimension the question
/// carries; ethics-category questions carry ethics.
fn scenario_bank() -> QuestionBank {
    let mut questions = Vec::new();
    let mut id = 1;
    for category in Category::ALL {
        for _ in 0..4 {
            let ethics = |score| (category == Category::Ethics).then_some(score);
            questions.push(Question {
                id,
                category,
                text: Cow::Owned(format!("{} question {}", category, id)),
                options: [
                    option(5, 5, ethics(5)),
                    option(3, 3, ethics(3)),
                    option(1, 2, ethics(1)),
                    option(0, 0, ethics(0)),
                ],
            });
            id += 1;
        }
    }
    QuestionBank::from_questions(questions)
}

#[test]
fn perfect_answers_make_a_safety_champion_visionary() {
    let bank = scenario_bank();
    assert!(validate_bank(bank.questions()).is_ok());

    let mut session = AssessmentSession::new(sample_questions(&bank, 4, &mut FixedSource::zero()));
    while session.current().is_some() {
        session.answer(0).unwrap();
    }

    let totals = session.totals();
    assert_eq!((totals.tech, totals.adapt, totals.ethics), (60, 60, 20));

    let result = session.finish(&mut FixedSource::zero()).unwrap();
    assert_eq!(result.id, ArchetypeId::VisionaryArchitect);
    assert_eq!(result.percentages.tech, 100.0);
    assert_eq!(result.percentages.adapt, 100.0);
    assert_eq!(result.percentages.ethics, 100.0);
    assert!(result.has_tag("Safety Champion"));
    assert!(!result.has_tag("High Risk Profile"));
    assert!(result
        .description
        .contains("Your strong ethical judgment makes you a 'Safety Champion'."));
    assert!(result
        .description
        .ends_with(ArchetypeId::VisionaryArchitect.template().description));

    let values: Vec<f64> = result.dimension_scores.iter().map(|d| d.value).collect();
    assert_eq!(values, vec![100.0, 100.0, 100.0, 100.0, 100.0]);
}

#[test]
fn exact_threshold_values() {
    assert_eq!(score(39, 39, 0, 12).id, ArchetypeId::VisionaryArchitect);
    assert_eq!(score(38, 39, 0, 12).id, ArchetypeId::AgileExplorer);
    assert_eq!(score(39, 38, 0, 12).id, ArchetypeId::TenXAchiever);
    assert_eq!(score(38, 38, 0, 12).id, ArchetypeId::HumanistStrategist);
}

#[test]
fn results_never_leak_into_each_other_or_the_template() {
    let first = score(60, 60, 20, 12);
    let second = score(55, 58, 2, 12);
    assert_eq!(first.id, second.id);
    assert!(first.has_tag("Safety Champion"));
    assert!(!first.has_tag("High Risk Profile"));
    assert!(second.has_tag("High Risk Profile"));
    assert!(!second.has_tag("Safety Champion"));
    assert_eq!(
        ArchetypeId::VisionaryArchitect.template().tags,
        &["Top 1% Talent", "Future Leader", "AI Native"]
    );
}

#[test]
fn yaml_bank_to_certificate_and_share_link() {
    let yaml = r#"
questions:
  - id: 10
    category: hustle
    text: "Draft a client proposal"
    options:
      - { text: "Prompt an LLM with past proposals", tech_score: 5, adapt_score: 4, feedback: "Efficient." }
      - { text: "Copy last year's", tech_score: 2, adapt_score: 1 }
      - { text: "Write from scratch", tech_score: 1, adapt_score: 2 }
      - { text: "Ask a senior", tech_score: 1, adapt_score: 3 }
  - id: 20
    category: mindset
    text: "A new AI tool launches"
    options:
      - { text: "Try it today", tech_score: 4, adapt_score: 5 }
      - { text: "Wait for reviews", tech_score: 2, adapt_score: 3 }
      - { text: "Ignore it", tech_score: 1, adapt_score: 1 }
      - { text: "Ban it", tech_score: 0, adapt_score: 0 }
  - id: 30
    category: ethics
    text: "Client data and a public chatbot"
    options:
      - { text: "Anonymize first", tech_score: 4, adapt_score: 4, ethics_score: 5 }
      - { text: "Paste it in", tech_score: 3, adapt_score: 3, ethics_score: 0 }
      - { text: "Ask IT", tech_score: 2, adapt_score: 3, ethics_score: 4 }
      - { text: "Avoid AI", tech_score: 1, adapt_score: 1, ethics_score: 3 }
"#;
    let bank = QuestionBank::from_yaml(yaml).unwrap();
    assert!(validate_bank(bank.questions()).is_ok());

    let mut session = AssessmentSession::new(sample_questions(&bank, 1, &mut FixedSource::zero()));
    let ids: Vec<u32> = session.questions().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
    assert_eq!(session.answer(0).unwrap().feedback, "Efficient.");
    session.answer(0).unwrap();
    session.answer(0).unwrap();

    let result = session.finish(&mut FixedSource::zero()).unwrap();
    assert_eq!(result.id, ArchetypeId::VisionaryArchitect);
    // ethics is normalized against four questions even though one was asked
    assert_eq!(result.percentages.ethics, 25.0);
    assert!(result.has_tag("High Risk Profile"));

    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
    let cert = Certificate::new("Neha Kapoor", &result, date, &mut FixedSource::zero());
    let path = export_svg(&cert, dir.path()).unwrap();
    let svg = std::fs::read_to_string(path).unwrap();
    assert!(svg.contains("26 January 2026"));
    assert!(svg.contains("THE VISIONARY ARCHITECT"));

    let url = share_url(SharePlatform::LinkedIn, &result, "https://ai-q.in");
    assert!(url.contains("Prompting%20and%20Risk%20Awareness"));
}
