pub mod assessment_session;
pub mod flashcard;
pub mod quiz_question;
pub mod quiz_session;
pub use assessment_session::{AssessmentError, AssessmentSession, ScoreSummary, SessionPhase};
pub use flashcard::Flashcard;
pub use quiz_question::{QuestionOption, QuestionRecord};
pub use quiz_session::QuizSession;
