use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::quiz_prompt::render_quiz_prompt,
    errors::{AppError, AppResult},
    models::{
        domain::{AssessmentSession, QuestionRecord, QuizSession},
        dto::{
            request::{GenerateQuizRequest, ParseQuizRequest, SelectAnswerRequest},
            response::{ScoreSummaryDto, SessionDto},
        },
    },
    repositories::SessionRepository,
    services::{response_parser::parse_quiz_response, text_generator::TextGenerator},
};

pub struct QuizService {
    generator: Arc<dyn TextGenerator>,
    repository: Arc<dyn SessionRepository>,
}

impl QuizService {
    pub fn new(generator: Arc<dyn TextGenerator>, repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            generator,
            repository,
        }
    }

    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<SessionDto> {
        request.validate()?;
        let topic = request.topic.trim();
        if topic.is_empty() {
            return Err(AppError::ValidationError("topic must not be blank".to_string()));
        }

        let prompt = render_quiz_prompt(topic, request.num_questions);
        let raw = self.generator.generate(&prompt).await?;

        let questions = parse_quiz_response(&raw);
        self.start_session(Some(topic.to_string()), questions).await
    }

    pub async fn start_from_text(&self, request: ParseQuizRequest) -> AppResult<SessionDto> {
        request.validate()?;

        let questions = parse_quiz_response(&request.raw_text);
        self.start_session(request.topic, questions).await
    }

    async fn start_session(
        &self,
        topic: Option<String>,
        questions: Vec<QuestionRecord>,
    ) -> AppResult<SessionDto> {
        if questions.is_empty() {
            log::warn!("No questions could be parsed from generated text");
            return Err(AppError::NothingGenerated(
                "no questions could be parsed from the generated text".to_string(),
            ));
        }

        let unusable = questions.iter().filter(|q| !q.is_usable()).count();
        if unusable > 0 {
            log::warn!("{} parsed questions have no usable answer", unusable);
        }

        let session = AssessmentSession::new(questions)?;
        let stored = self
            .repository
            .insert(QuizSession::new(topic, session))
            .await?;

        log::info!(
            "Started session {} with {} questions",
            stored.id,
            stored.session.len()
        );
        Ok(SessionDto::from(&stored))
    }

    async fn load(&self, id: &Uuid) -> AppResult<QuizSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<SessionDto> {
        let stored = self.load(id).await?;
        Ok(SessionDto::from(&stored))
    }

    pub async fn select_answer(
        &self,
        id: &Uuid,
        index: usize,
        request: SelectAnswerRequest,
    ) -> AppResult<SessionDto> {
        request.validate()?;

        let letter = request.letter;
        let stored = self
            .repository
            .modify(
                id,
                Box::new(move |stored: &mut QuizSession| -> AppResult<()> {
                    stored.session.select_answer(index, letter.as_deref())?;
                    stored.touch();
                    Ok(())
                }),
            )
            .await?;
        Ok(SessionDto::from(&stored))
    }

    pub async fn submit(&self, id: &Uuid) -> AppResult<ScoreSummaryDto> {
        let stored = self
            .repository
            .modify(
                id,
                Box::new(|stored: &mut QuizSession| -> AppResult<()> {
                    if stored.session.is_submitted() {
                        return Ok(());
                    }
                    stored.session.submit()?;
                    stored.touch();
                    Ok(())
                }),
            )
            .await?;

        let summary = ScoreSummaryDto::from(stored.session.score()?);
        log::info!(
            "Session {} submitted: {}/{} correct",
            id,
            summary.correct,
            summary.total
        );
        Ok(summary)
    }

    pub async fn score(&self, id: &Uuid) -> AppResult<ScoreSummaryDto> {
        let stored = self.load(id).await?;
        Ok(ScoreSummaryDto::from(stored.session.score()?))
    }

    /// Start a new session over the same questions. The old one is discarded.
    pub async fn restart(&self, id: &Uuid) -> AppResult<SessionDto> {
        let stored = self.load(id).await?;
        let fresh = QuizSession::new(stored.topic.clone(), stored.session.restart());

        let fresh = self.repository.insert(fresh).await?;
        self.repository.delete(id).await?;

        log::info!("Session {} restarted as {}", id, fresh.id);
        Ok(SessionDto::from(&fresh))
    }

    pub async fn discard_session(&self, id: &Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                id
            )));
        }
        log::info!("Session {} discarded", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{assessment_session::NO_ANSWER, SessionPhase},
        repositories::InMemorySessionRepository,
        services::text_generator::MockTextGenerator,
        test_utils::fixtures::{SAMPLE_QUIZ_TEXT, TWO_QUESTION_TEXT},
    };

    fn service_with(generator: MockTextGenerator) -> QuizService {
        QuizService::new(
            Arc::new(generator),
            Arc::new(InMemorySessionRepository::new()),
        )
    }

    fn service_without_generator() -> QuizService {
        let mut generator = MockTextGenerator::new();
        generator.expect_generate().never();
        service_with(generator)
    }

    fn parse_request(raw: &str) -> ParseQuizRequest {
        ParseQuizRequest {
            raw_text: raw.to_string(),
            topic: None,
        }
    }

    fn answer(letter: Option<&str>) -> SelectAnswerRequest {
        SelectAnswerRequest {
            letter: letter.map(str::to_string),
        }
    }

    #[actix_web::test]
    async fn generate_quiz_sends_rendered_prompt_and_stores_session() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt| prompt.starts_with("Generate 3 multiple-choice questions on lifetimes."))
            .times(1)
            .returning(|_| Ok(SAMPLE_QUIZ_TEXT.to_string()));
        let service = service_with(generator);

        let session = service
            .generate_quiz(GenerateQuizRequest {
                topic: "  lifetimes ".to_string(),
                num_questions: 3,
            })
            .await
            .unwrap();

        assert_eq!(session.topic.as_deref(), Some("lifetimes"));
        assert_eq!(session.questions.len(), 3);
        assert_eq!(session.phase, SessionPhase::Answering);

        let fetched = service.get_session(&session.id).await.unwrap();
        assert_eq!(fetched.id, session.id);
    }

    #[actix_web::test]
    async fn generate_quiz_rejects_blank_topic_without_calling_generator() {
        let service = service_without_generator();

        let result = service
            .generate_quiz(GenerateQuizRequest {
                topic: "   ".to_string(),
                num_questions: 5,
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn generate_quiz_reports_nothing_generated() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok("Sorry, I cannot help with that.".to_string()));
        let service = service_with(generator);

        let result = service
            .generate_quiz(GenerateQuizRequest {
                topic: "anything".to_string(),
                num_questions: 5,
            })
            .await;

        assert!(matches!(result, Err(AppError::NothingGenerated(_))));
    }

    #[actix_web::test]
    async fn generate_quiz_propagates_generation_errors() {
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(AppError::GenerationError("quota exceeded".to_string())));
        let service = service_with(generator);

        let result = service
            .generate_quiz(GenerateQuizRequest {
                topic: "anything".to_string(),
                num_questions: 5,
            })
            .await;

        assert!(matches!(result, Err(AppError::GenerationError(_))));
    }

    #[actix_web::test]
    async fn full_flow_selects_submits_and_scores() {
        let service = service_without_generator();
        let session = service
            .start_from_text(parse_request(TWO_QUESTION_TEXT))
            .await
            .unwrap();

        service
            .select_answer(&session.id, 0, answer(Some("a")))
            .await
            .unwrap();
        service
            .select_answer(&session.id, 1, answer(Some("a")))
            .await
            .unwrap();

        let submitted = service.submit(&session.id).await.unwrap();
        let scored = service.score(&session.id).await.unwrap();

        assert_eq!(submitted.correct, 1);
        assert_eq!(submitted.total, 2);
        assert_eq!(scored.results, submitted.results);
    }

    #[actix_web::test]
    async fn score_before_submit_is_a_conflict() {
        let service = service_without_generator();
        let session = service
            .start_from_text(parse_request(TWO_QUESTION_TEXT))
            .await
            .unwrap();

        let result = service.score(&session.id).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[actix_web::test]
    async fn submit_twice_returns_identical_scores() {
        let service = service_without_generator();
        let session = service
            .start_from_text(parse_request(TWO_QUESTION_TEXT))
            .await
            .unwrap();
        service
            .select_answer(&session.id, 1, answer(Some("b")))
            .await
            .unwrap();

        let first = service.submit(&session.id).await.unwrap();
        let second = service.submit(&session.id).await.unwrap();

        assert_eq!(first.results, second.results);
        assert_eq!(first.correct, second.correct);
    }

    #[actix_web::test]
    async fn select_after_submit_is_a_conflict() {
        let service = service_without_generator();
        let session = service
            .start_from_text(parse_request(TWO_QUESTION_TEXT))
            .await
            .unwrap();
        service.submit(&session.id).await.unwrap();

        let result = service
            .select_answer(&session.id, 0, answer(Some("a")))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[actix_web::test]
    async fn select_out_of_range_is_a_validation_error() {
        let service = service_without_generator();
        let session = service
            .start_from_text(parse_request(TWO_QUESTION_TEXT))
            .await
            .unwrap();

        let result = service
            .select_answer(&session.id, 2, answer(Some("a")))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn blank_letter_is_scored_as_no_answer() {
        let service = service_without_generator();
        let session = service
            .start_from_text(parse_request(TWO_QUESTION_TEXT))
            .await
            .unwrap();
        service
            .select_answer(&session.id, 0, answer(Some(" ")))
            .await
            .unwrap();

        let summary = service.submit(&session.id).await.unwrap();

        assert_eq!(summary.results[0].user_answer, NO_ANSWER);
        assert!(!summary.results[0].is_correct);
    }

    #[actix_web::test]
    async fn rejected_answer_leaves_stored_session_untouched() {
        let service = service_without_generator();
        let session = service
            .start_from_text(parse_request(TWO_QUESTION_TEXT))
            .await
            .unwrap();
        let before = service.get_session(&session.id).await.unwrap();

        let result = service
            .select_answer(&session.id, 5, answer(Some("a")))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        let after = service.get_session(&session.id).await.unwrap();
        assert_eq!(after.modified_at, before.modified_at);
        assert_eq!(after.phase, SessionPhase::Answering);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_answers_never_reopen_a_submitted_session() {
        let service = Arc::new(service_without_generator());

        for _ in 0..50 {
            let session = service
                .start_from_text(parse_request(TWO_QUESTION_TEXT))
                .await
                .unwrap();
            let id = session.id;

            let mut tasks = Vec::new();
            for round in 0..7 {
                let service = Arc::clone(&service);
                tasks.push(tokio::spawn(async move {
                    let _ = service
                        .select_answer(&id, round % 2, answer(Some("a")))
                        .await;
                }));
            }
            let submitter = {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.submit(&id).await })
            };

            for task in tasks {
                task.await.unwrap();
            }
            let summary = submitter.await.unwrap().unwrap();

            let stored = service.get_session(&id).await.unwrap();
            assert_eq!(stored.phase, SessionPhase::Submitted);
            let scored = service.score(&id).await.unwrap();
            assert_eq!(scored.results, summary.results);
        }
    }

    #[actix_web::test]
    async fn restart_replaces_the_session() {
        let service = service_without_generator();
        let session = service
            .start_from_text(parse_request(TWO_QUESTION_TEXT))
            .await
            .unwrap();
        service.submit(&session.id).await.unwrap();

        let fresh = service.restart(&session.id).await.unwrap();

        assert_ne!(fresh.id, session.id);
        assert_eq!(fresh.phase, SessionPhase::Answering);
        assert!(matches!(
            service.get_session(&session.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn discard_unknown_session_is_not_found() {
        let service = service_without_generator();

        let result = service.discard_session(&Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
