use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{
    assessment_session::QuestionResult, Flashcard, QuestionOption, QuestionRecord, QuizSession,
    ScoreSummary, SessionPhase,
};

/// A question as shown while answering. The correct letter stays hidden.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub index: usize,
    pub prompt_text: String,
    pub options: Vec<QuestionOption>,
}

impl QuestionDto {
    fn from_record(index: usize, record: &QuestionRecord) -> Self {
        QuestionDto {
            index,
            prompt_text: record.prompt_text.clone(),
            options: record.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub id: Uuid,
    pub topic: Option<String>,
    pub phase: SessionPhase,
    pub questions: Vec<QuestionDto>,
    pub answers: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ScoreSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&QuizSession> for SessionDto {
    fn from(stored: &QuizSession) -> Self {
        let session = &stored.session;
        SessionDto {
            id: stored.id,
            topic: stored.topic.clone(),
            phase: session.phase(),
            questions: session
                .questions()
                .iter()
                .enumerate()
                .map(|(index, record)| QuestionDto::from_record(index, record))
                .collect(),
            answers: session.answers().to_vec(),
            summary: session.score().ok().map(ScoreSummaryDto::from),
            created_at: stored.created_at,
            modified_at: stored.modified_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummaryDto {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub percentage: f64,
    pub results: Vec<QuestionResult>,
}

impl From<&ScoreSummary> for ScoreSummaryDto {
    fn from(summary: &ScoreSummary) -> Self {
        ScoreSummaryDto {
            correct: summary.correct,
            incorrect: summary.incorrect(),
            total: summary.total,
            percentage: summary.percentage(),
            results: summary.results.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardDeckDto {
    pub count: usize,
    pub cards: Vec<Flashcard>,
}

impl From<Vec<Flashcard>> for FlashcardDeckDto {
    fn from(cards: Vec<Flashcard>) -> Self {
        FlashcardDeckDto {
            count: cards.len(),
            cards,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::AssessmentSession;

    fn stored_session() -> QuizSession {
        let session = AssessmentSession::new(vec![QuestionRecord::new("Q?")
            .with_option('a', "X")
            .with_option('b', "Y")
            .with_correct_letter('b')])
        .unwrap();
        QuizSession::new(Some("topic".to_string()), session)
    }

    #[test]
    fn session_dto_hides_correct_answer_before_submit() {
        let stored = stored_session();

        let json = serde_json::to_value(SessionDto::from(&stored)).unwrap();

        assert_eq!(json["phase"], "answering");
        assert!(json.get("summary").is_none());
        assert!(json["questions"][0].get("correct_letter").is_none());
        assert_eq!(json["questions"][0]["options"][1]["text"], "Y");
    }

    #[test]
    fn session_dto_includes_summary_after_submit() {
        let mut stored = stored_session();
        stored.session.select_answer(0, Some("b")).unwrap();
        stored.session.submit().unwrap();

        let dto = SessionDto::from(&stored);

        let summary = dto.summary.expect("summary should be present");
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.incorrect, 0);
        assert_eq!(summary.percentage, 100.0);
    }

    #[test]
    fn flashcard_deck_counts_cards() {
        let deck = FlashcardDeckDto::from(vec![Flashcard::new("Q", "A"), Flashcard::new("Q2", "A2")]);

        assert_eq!(deck.count, 2);
    }
}
