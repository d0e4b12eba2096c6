pub mod archetype;
pub mod bank;
pub mod engine;
pub mod question;
pub mod random;
pub mod sampler;
pub mod session;
pub mod validation;

pub use archetype::{Archetype, ArchetypeId, ArchetypeTemplate, DimensionScore};
pub use bank::{all_questions, QuestionBank};
pub use engine::{
    calculate_result, classify, score, Percentages, Totals, CLASSIFICATION_THRESHOLD,
    DIMENSION_LABELS, ETHICS_QUESTIONS,
};
pub use question::{AnswerOption, Category, Question};
pub use random::{FixedSource, RandomSource, RngSource};
pub use sampler::{sample, sample_questions, DEFAULT_PER_CATEGORY};
pub use session::{AssessmentSession, SessionError};
pub use validation::validate_bank;
