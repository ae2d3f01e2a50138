pub mod quiz_session;
pub mod scoring_service;
pub mod session_service;

pub use quiz_session::{QuizSession, Rejection};
pub use scoring_service::ScoringService;
pub use session_service::{SessionService, SessionSettings};
