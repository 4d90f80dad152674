use std::sync::Arc;
use validator::Validate;

use crate::{
    constants::quiz_prompt::render_flashcard_prompt,
    errors::{AppError, AppResult},
    models::{
        domain::Flashcard,
        dto::{
            request::{GenerateFlashcardsRequest, ParseFlashcardsRequest},
            response::FlashcardDeckDto,
        },
    },
    services::{flashcard_parser::parse_flashcards, text_generator::TextGenerator},
};

pub struct FlashcardService {
    generator: Arc<dyn TextGenerator>,
}

impl FlashcardService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate_flashcards(
        &self,
        request: GenerateFlashcardsRequest,
    ) -> AppResult<FlashcardDeckDto> {
        request.validate()?;
        if request.notes.trim().is_empty() {
            return Err(AppError::ValidationError("notes must not be blank".to_string()));
        }

        let prompt = render_flashcard_prompt(&request.notes, request.num_flashcards);
        let raw = self.generator.generate(&prompt).await?;

        let cards = non_empty(parse_flashcards(&raw))?;
        log::info!("Generated {} flashcards", cards.len());
        Ok(cards.into())
    }

    pub fn parse_flashcards(&self, request: ParseFlashcardsRequest) -> AppResult<FlashcardDeckDto> {
        request.validate()?;
        Ok(non_empty(parse_flashcards(&request.raw_text))?.into())
    }
}

fn non_empty(cards: Vec<Flashcard>) -> AppResult<Vec<Flashcard>> {
    if cards.is_empty() {
        log::warn!("No flashcards could be parsed from generated text");
        return Err(AppError::NothingGenerated(
            "no flashcards could be parsed from the generated text".to_string(),
        ));
    }
    Ok(cards)
}
