use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::domain::quiz_question::QuestionRecord;

/// Shown in place of the user's answer for questions left unanswered.
pub const NO_ANSWER: &str = "No answer";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("cannot start an assessment without questions")]
    NoQuestions,

    #[error("question index {index} is out of range for {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("answers have already been submitted")]
    AlreadySubmitted,

    #[error("answers have not been submitted yet")]
    NotSubmitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Answering,
    Submitted,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Answering => write!(f, "answering"),
            SessionPhase::Submitted => write!(f, "submitted"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub index: usize,
    pub prompt_text: String,
    /// Upper-cased answer, or [`NO_ANSWER`].
    pub user_answer: String,
    /// Upper-cased correct letter, empty when the question had none.
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
    pub results: Vec<QuestionResult>,
}

impl ScoreSummary {
    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }
}

/// One interactive pass over a fixed set of questions.
///
/// The session starts in [`SessionPhase::Answering`], where answers may be
/// changed freely, and moves to [`SessionPhase::Submitted`] exactly once.
/// Submitting again returns the summary computed the first time. Any
/// mutation after submission, or reading the score before it, is reported
/// as an [`AssessmentError`]. Use [`AssessmentSession::restart`] to take the
/// same questions again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    questions: Vec<QuestionRecord>,
    answers: Vec<Option<String>>,
    phase: SessionPhase,
    summary: Option<ScoreSummary>,
}

impl AssessmentSession {
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, AssessmentError> {
        if questions.is_empty() {
            return Err(AssessmentError::NoQuestions);
        }

        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            answers,
            phase: SessionPhase::Answering,
            summary: None,
        })
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SessionPhase::Submitted
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Record (or clear, with `None`) the answer for one question.
    ///
    /// The letter is stored as given; a letter that names no option is
    /// accepted and scores as wrong.
    pub fn select_answer(
        &mut self,
        index: usize,
        letter: Option<&str>,
    ) -> Result<(), AssessmentError> {
        if self.is_submitted() {
            return Err(AssessmentError::AlreadySubmitted);
        }

        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(AssessmentError::QuestionOutOfRange { index, len })?;
        *slot = letter.map(str::to_string);
        Ok(())
    }

    pub fn submit(&mut self) -> Result<&ScoreSummary, AssessmentError> {
        if self.summary.is_none() {
            self.summary = Some(self.grade());
            self.phase = SessionPhase::Submitted;
        }
        self.score()
    }

    pub fn score(&self) -> Result<&ScoreSummary, AssessmentError> {
        self.summary.as_ref().ok_or(AssessmentError::NotSubmitted)
    }

    pub fn restart(&self) -> AssessmentSession {
        AssessmentSession {
            questions: self.questions.clone(),
            answers: vec![None; self.questions.len()],
            phase: SessionPhase::Answering,
            summary: None,
        }
    }

    fn grade(&self) -> ScoreSummary {
        let results: Vec<QuestionResult> = self
            .questions
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(index, (question, answer))| grade_question(index, question, answer.as_deref()))
            .collect();

        ScoreSummary {
            correct: results.iter().filter(|r| r.is_correct).count(),
            total: results.len(),
            results,
        }
    }
}

fn grade_question(index: usize, question: &QuestionRecord, answer: Option<&str>) -> QuestionResult {
    let given = answer
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty());
    let is_correct = match (&given, question.correct_letter) {
        (Some(given), Some(correct)) => given.chars().eq(std::iter::once(correct)),
        _ => false,
    };

    QuestionResult {
        index,
        prompt_text: question.prompt_text.clone(),
        user_answer: given
            .map(|g| g.to_uppercase())
            .unwrap_or_else(|| NO_ANSWER.to_string()),
        correct_answer: question
            .correct_letter
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default(),
        is_correct,
    }
}
