use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::SessionSnapshot,
    presentation::SnapshotChannel,
    services::SessionService,
    sources::{HttpQuizSource, QuestionSource, StaticQuizSource},
};

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService>,
    pub snapshots: SnapshotChannel,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let settings = config.session_settings();

        let source: Arc<dyn QuestionSource> = match &config.quiz_file {
            Some(path) => Arc::new(StaticQuizSource::from_json_file(path)),
            None => Arc::new(HttpQuizSource::new(
                &config.quiz_source_url,
                settings.load_timeout,
            )?),
        };
        log::info!("Quiz source: {}", source.describe());

        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: Config, source: Arc<dyn QuestionSource>) -> Self {
        let snapshots = SnapshotChannel::new(SessionSnapshot::loading());
        let session_service = Arc::new(SessionService::new(
            source,
            Arc::new(snapshots.clone()),
            config.session_settings(),
        ));

        Self {
            session_service,
            snapshots,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_prefers_quiz_file() {
        let mut config = Config::test_config();
        config.quiz_file = Some("/tmp/quiz.json".to_string());

        let state = AppState::new(config).expect("state should build");
        assert_eq!(state.snapshots.latest(), SessionSnapshot::loading());
    }
}
