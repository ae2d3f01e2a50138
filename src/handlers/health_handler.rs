use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::domain::SessionPhase};

#[get("/api/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let snapshot = state.session_service.snapshot().await;
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "quiz_loaded": snapshot.quiz.is_some(),
        "loading": snapshot.phase == SessionPhase::Loading,
        "reveal_duration_ms": state.config.reveal_duration_ms
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{test, App};

    use crate::config::Config;
    use crate::sources::StaticQuizSource;
    use crate::test_utils::fixtures::sample_quiz;

    #[actix_web::test]
    async fn test_health_check() {
        let state = AppState::with_source(
            Config::test_config(),
            Arc::new(StaticQuizSource::new(sample_quiz())),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["quiz_loaded"], false);
        assert_eq!(body["loading"], true);
        assert_eq!(body["reveal_duration_ms"], 0);
    }
}
