use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::{
        flashcard_service::FlashcardService,
        quiz_service::QuizService,
        text_generator::{ChatCompletionGenerator, TextGenerator},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub flashcard_service: Arc<FlashcardService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = Arc::new(ChatCompletionGenerator::new(&config)?);
        let repository = Arc::new(InMemorySessionRepository::new());

        Ok(Self::from_parts(config, generator, repository))
    }

    pub fn from_parts(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        repository: Arc<dyn SessionRepository>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(generator.clone(), repository));
        let flashcard_service = Arc::new(FlashcardService::new(generator));

        Self {
            quiz_service,
            flashcard_service,
            config: Arc::new(config),
        }
    }
}
