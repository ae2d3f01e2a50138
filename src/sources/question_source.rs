use async_trait::async_trait;

use crate::{errors::AppResult, models::domain::Quiz};

/// Supplies the quiz for a session. Implementations own every transport and payload concern
/// and hand back a quiz that already passes `Quiz::ensure_valid`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn load_quiz(&self) -> AppResult<Quiz>;

    /// Short label for logs.
    fn describe(&self) -> String;
}
