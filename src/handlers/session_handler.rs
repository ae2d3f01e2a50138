use std::time::Duration;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{SelectOptionRequest, UpdatesQuery},
};

const LONG_POLL_TIMEOUT: Duration = Duration::from_secs(25);

#[get("/api/session")]
async fn get_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.snapshot().await;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// Long-poll: answers as soon as the session moves past `since`, e.g. after a reveal timer.
#[get("/api/session/updates")]
async fn get_session_updates(
    state: web::Data<AppState>,
    query: web::Query<UpdatesQuery>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state
        .snapshots
        .wait_newer_than(query.since, LONG_POLL_TIMEOUT)
        .await;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/session/load")]
async fn load_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.load().await;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/session/start")]
async fn start_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.start().await;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/session/restart")]
async fn restart_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.restart().await;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/session/select")]
async fn select_option(
    state: web::Data<AppState>,
    request: web::Json<SelectOptionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let snapshot = state
        .session_service
        .select_option(&request.question_id, &request.option_id)
        .await;
    Ok(HttpResponse::Ok().json(snapshot))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_session)
        .service(get_session_updates)
        .service(load_quiz)
        .service(start_quiz)
        .service(restart_quiz)
        .service(select_option);
}
