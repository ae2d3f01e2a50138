use crate::models::domain::SessionSnapshot;

/// Receives every snapshot the session produces, in order. Implementations only render;
/// changes go back through `SessionService` intents.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationPort: Send + Sync {
    fn render(&self, snapshot: &SessionSnapshot);
}
