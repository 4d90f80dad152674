use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuizRequest, ParseQuizRequest},
};

#[post("/api/quizzes")]
pub async fn generate_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(session))
}

#[post("/api/quizzes/parse")]
pub async fn parse_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<ParseQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.start_from_text(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(session))
}
