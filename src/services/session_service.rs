//! Runs a `QuizSession` on the tokio runtime.
//!
//! All intents funnel through one mutex, so transitions are applied one at a time and every
//! snapshot handed to the presentation port is consistent. The reveal delay is a spawned task
//! carrying a `RevealTicket`; resets abort the task and the session discards the ticket anyway
//! if it still arrives.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::{
    errors::AppError,
    models::domain::SessionSnapshot,
    presentation::PresentationPort,
    services::quiz_session::{QuizSession, Rejection, RevealTicket},
    sources::QuestionSource,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    /// How long the correct answer stays visible before the session moves on.
    pub reveal_duration: Duration,
    /// Upper bound for one `load_quiz` call. `None` waits indefinitely.
    pub load_timeout: Option<Duration>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            reveal_duration: Duration::from_millis(1500),
            load_timeout: Some(Duration::from_secs(10)),
        }
    }
}

#[derive(Clone)]
pub struct SessionService {
    session: Arc<Mutex<QuizSession>>,
    source: Arc<dyn QuestionSource>,
    presenter: Arc<dyn PresentationPort>,
    settings: SessionSettings,
    reveal_task: Arc<StdMutex<Option<JoinHandle<()>>>>,
}

impl SessionService {
    pub fn new(
        source: Arc<dyn QuestionSource>,
        presenter: Arc<dyn PresentationPort>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(QuizSession::new())),
            source,
            presenter,
            settings,
            reveal_task: Arc::new(StdMutex::new(None)),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    /// Enter `Loading` and ask the source for a quiz. Calling this again while a load is in
    /// flight starts a fresh load; the older one's outcome is dropped when it arrives.
    pub async fn load(&self) -> SessionSnapshot {
        let ticket = {
            let mut session = self.session.lock().await;
            self.cancel_reveal();
            let ticket = session.begin_load();
            self.presenter.render(&session.snapshot());
            ticket
        };

        log::info!("Loading quiz from {}", self.source.describe());
        let outcome = match self.settings.load_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.source.load_quiz()).await {
                Ok(outcome) => outcome,
                Err(_) => Err(Self::timeout_error(limit)),
            },
            None => self.source.load_quiz().await,
        };

        let mut session = self.session.lock().await;
        match session.finish_load(ticket, outcome) {
            Ok(()) => self.presenter.render(&session.snapshot()),
            Err(rejection) => log::debug!("Discarded load outcome: {:?}", rejection),
        }
        session.snapshot()
    }

    pub async fn start(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        let outcome = session.start();
        self.after_reset(&session, "start", outcome)
    }

    pub async fn restart(&self) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        let outcome = session.restart();
        self.after_reset(&session, "restart", outcome)
    }

    pub async fn select_option(&self, question_id: &str, option_id: &str) -> SessionSnapshot {
        let mut session = self.session.lock().await;
        match session.select_option(question_id, option_id) {
            Ok(ticket) => {
                self.presenter.render(&session.snapshot());
                if self.settings.reveal_duration.is_zero() {
                    Self::apply_reveal(&mut session, self.presenter.as_ref(), ticket);
                } else {
                    self.schedule_reveal(ticket);
                }
            }
            Err(rejection) => log::debug!(
                "Ignored selection of '{}' for question '{}': {:?}",
                option_id,
                question_id,
                rejection
            ),
        }
        session.snapshot()
    }

    fn after_reset(
        &self,
        session: &QuizSession,
        intent: &str,
        outcome: Result<(), Rejection>,
    ) -> SessionSnapshot {
        match outcome {
            Ok(()) => {
                self.cancel_reveal();
                log::info!(
                    "Quiz run {} begins ({})",
                    session.run_id().map(|id| id.to_string()).unwrap_or_default(),
                    intent
                );
                self.presenter.render(&session.snapshot());
            }
            Err(rejection) => log::debug!("Ignored {}: {:?}", intent, rejection),
        }
        session.snapshot()
    }

    fn schedule_reveal(&self, ticket: RevealTicket) {
        let service = self.clone();
        let delay = self.settings.reveal_duration;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut session = service.session.lock().await;
            Self::apply_reveal(&mut session, service.presenter.as_ref(), ticket);
        });

        let mut slot = self.reveal_task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    fn apply_reveal(session: &mut QuizSession, presenter: &dyn PresentationPort, ticket: RevealTicket) {
        match session.reveal_elapsed(ticket) {
            Ok(()) => presenter.render(&session.snapshot()),
            Err(rejection) => log::debug!(
                "Dropped reveal timer for question {}: {:?}",
                ticket.question_index(),
                rejection
            ),
        }
    }

    fn timeout_error(limit: Duration) -> AppError {
        AppError::LoadTimeout(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX))
    }

    fn cancel_reveal(&self) {
        let mut slot = self.reveal_task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}
