use super::archetype::Archetype;
use super::engine::{calculate_result, Totals};
use super::question::{AnswerOption, Question};
use super::random::RandomSource;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("option {index} does not exist (question has {available} options)")]
    InvalidOption { index: usize, available: usize },

    #[error("all questions have already been answered")]
    Complete,

    #[error("{remaining} question(s) still unanswered")]
    Incomplete { remaining: usize },

    #[error("the assessment has no questions")]
    Empty,
}

/// Ephemeral state of one assessment: the presented questions, the cursor and
/// the running totals. One answer per question, in order, no going back.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    questions: Vec<Question>,
    current: usize,
    totals: Totals,
}

impl AssessmentSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            totals: Totals::default(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question awaiting an answer, or `None` once every question is answered.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// `(answered, total)`
    pub fn progress(&self) -> (usize, usize) {
        (self.current.min(self.questions.len()), self.questions.len())
    }

    /// Position of the question on screen as a rounded percentage, counting the
    /// one being shown.
    pub fn percent_complete(&self) -> u16 {
        let total = self.questions.len();
        if total == 0 {
            return 100;
        }
        let shown = (self.current + 1).min(total);
        ((shown as f64 / total as f64) * 100.0).round() as u16
    }

    /// Record the option at `index` for the current question and advance.
    pub fn answer(&mut self, index: usize) -> Result<&AnswerOption, SessionError> {
        let question = self.questions.get(self.current).ok_or(SessionError::Complete)?;
        let option = question.option(index).ok_or(SessionError::InvalidOption {
            index,
            available: question.options.len(),
        })?;

        self.totals.add(option);
        tracing::debug!(
            question = question.id,
            option = index,
            tech = self.totals.tech,
            adapt = self.totals.adapt,
            ethics = self.totals.ethics,
            "answer recorded"
        );
        self.current += 1;
        Ok(option)
    }

    /// Score the completed session against the number of questions presented.
    pub fn finish(&self, random: &mut impl RandomSource) -> Result<Archetype, SessionError> {
        if self.questions.is_empty() {
            return Err(SessionError::Empty);
        }
        if !self.is_complete() {
            return Err(SessionError::Incomplete {
                remaining: self.questions.len() - self.current,
            });
        }
        let answered = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Ok(calculate_result(self.totals, answered, random))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::archetype::ArchetypeId;
    use crate::assessment::bank::QuestionBank;
    use crate::assessment::random::FixedSource;
    use crate::assessment::sampler::sample_questions;

    fn session() -> AssessmentSession {
        let bank = QuestionBank::builtin();
        AssessmentSession::new(sample_questions(&bank, 4, &mut FixedSource::zero()))
    }

    #[test]
    fn test_answer_accumulates_in_order() {
        let mut session = session();
        let first = session.current().unwrap().clone();
        let chosen = session.answer(2).unwrap().clone();
        assert_eq!(chosen, first.options[2]);
        assert_eq!(session.totals().tech, u32::from(chosen.tech_score));
        assert_eq!(session.totals().adapt, u32::from(chosen.adapt_score));
        assert_eq!(session.totals().ethics, u32::from(chosen.ethics()));
        assert_eq!(session.progress(), (1, 12));
        assert_ne!(session.current().unwrap().id, first.id);
    }

    #[test]
    fn test_invalid_option_does_not_advance() {
        let mut session = session();
        let err = session.answer(4).unwrap_err();
        assert_eq!(err, SessionError::InvalidOption { index: 4, available: 4 });
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.totals(), Totals::default());
    }

    #[test]
    fn test_finish_requires_completion() {
        let mut session = session();
        session.answer(0).unwrap();
        let err = session.finish(&mut FixedSource::zero()).unwrap_err();
        assert_eq!(err, SessionError::Incomplete { remaining: 11 });
    }

    #[test]
    fn test_empty_session() {
        let session = AssessmentSession::new(Vec::new());
        assert!(session.is_complete());
        assert_eq!(
            session.finish(&mut FixedSource::zero()).unwrap_err(),
            SessionError::Empty
        );
    }

    #[test]
    fn test_no_answers_after_completion() {
        let mut session = session();
        for _ in 0..12 {
            session.answer(0).unwrap();
        }
        assert!(session.is_complete());
        assert!(session.current().is_none());
        assert_eq!(session.answer(0).unwrap_err(), SessionError::Complete);
        assert_eq!(session.progress(), (12, 12));
    }

    #[test]
    fn test_best_answers_give_visionary() {
        let mut session = session();
        while let Some(question) = session.current() {
            let best = question
                .options
                .iter()
                .enumerate()
                .max_by_key(|(_, o)| (o.tech_score + o.adapt_score, o.ethics()))
                .map(|(i, _)| i)
                .unwrap();
            session.answer(best).unwrap();
        }
        let result = session.finish(&mut FixedSource::zero()).unwrap();
        assert_eq!(result.id, ArchetypeId::VisionaryArchitect);
    }

    #[test]
    fn test_percent_complete() {
        let mut session = session();
        assert_eq!(session.percent_complete(), 8);
        for _ in 0..5 {
            session.answer(1).unwrap();
        }
        assert_eq!(session.percent_complete(), 50);
        for _ in 0..7 {
            session.answer(1).unwrap();
        }
        assert_eq!(session.percent_complete(), 100);
    }
}
