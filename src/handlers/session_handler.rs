use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SelectAnswerRequest, response::DeleteSessionResponse},
};

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[put("/api/sessions/{id}/answers/{index}")]
pub async fn select_answer(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(Uuid, usize)>,
    request: web::Json<SelectAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, index) = path.into_inner();
    let session = state
        .quiz_service
        .select_answer(&id, index, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/api/sessions/{id}/submit")]
pub async fn submit_session(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let summary = state.quiz_service.submit(&id).await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[get("/api/sessions/{id}/score")]
pub async fn get_score(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let summary = state.quiz_service.score(&id).await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[post("/api/sessions/{id}/restart")]
pub async fn restart_session(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.restart(&id).await?;
    Ok(HttpResponse::Created().json(session))
}

#[delete("/api/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<Arc<AppState>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.discard_session(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteSessionResponse {
        message: format!("Session '{}' discarded", id.into_inner()),
    }))
}
