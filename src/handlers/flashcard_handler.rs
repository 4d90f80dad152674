use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateFlashcardsRequest, ParseFlashcardsRequest},
};

#[post("/api/flashcards")]
pub async fn generate_flashcards(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateFlashcardsRequest>,
) -> Result<HttpResponse, AppError> {
    let deck = state
        .flashcard_service
        .generate_flashcards(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(deck))
}

#[post("/api/flashcards/parse")]
pub async fn parse_flashcards(
    state: web::Data<Arc<AppState>>,
    request: web::Json<ParseFlashcardsRequest>,
) -> Result<HttpResponse, AppError> {
    let deck = state.flashcard_service.parse_flashcards(request.into_inner())?;
    Ok(HttpResponse::Ok().json(deck))
}
