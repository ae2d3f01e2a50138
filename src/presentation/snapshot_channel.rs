use std::time::Duration;

use tokio::sync::watch;

use crate::{
    models::domain::SessionSnapshot,
    presentation::PresentationPort,
};

/// Latest-value channel between the session and any number of HTTP long-pollers.
#[derive(Clone)]
pub struct SnapshotChannel {
    sender: watch::Sender<SessionSnapshot>,
}

impl SnapshotChannel {
    pub fn new(initial: SessionSnapshot) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn latest(&self) -> SessionSnapshot {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.sender.subscribe()
    }

    /// Wait until a snapshot newer than `since` is published, or give up after `timeout`
    /// and return whatever is current.
    pub async fn wait_newer_than(&self, since: u64, timeout: Duration) -> SessionSnapshot {
        let mut receiver = self.subscribe();
        let newer = tokio::time::timeout(timeout, async {
            receiver
                .wait_for(|snapshot| snapshot.version > since)
                .await
                .map(|snapshot| snapshot.clone())
        })
        .await;

        match newer {
            Ok(Ok(snapshot)) => snapshot,
            _ => self.latest(),
        }
    }
}

impl PresentationPort for SnapshotChannel {
    fn render(&self, snapshot: &SessionSnapshot) {
        self.sender.send_replace(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::SessionPhase;

    fn snapshot(version: u64, phase: SessionPhase) -> SessionSnapshot {
        SessionSnapshot {
            version,
            phase,
            ..SessionSnapshot::loading()
        }
    }

    #[test]
    fn render_replaces_latest_without_subscribers() {
        let channel = SnapshotChannel::new(SessionSnapshot::loading());

        channel.render(&snapshot(3, SessionPhase::Intro));

        assert_eq!(channel.latest().version, 3);
        assert_eq!(channel.latest().phase, SessionPhase::Intro);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_returns_current_when_already_newer() {
        let channel = SnapshotChannel::new(snapshot(5, SessionPhase::Intro));

        let seen = channel.wait_newer_than(2, Duration::from_secs(25)).await;
        assert_eq!(seen.version, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_wakes_on_publish() {
        let channel = SnapshotChannel::new(snapshot(1, SessionPhase::Intro));
        let publisher = channel.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            publisher.render(&snapshot(2, SessionPhase::Completed));
        });

        let seen = channel.wait_newer_than(1, Duration::from_secs(25)).await;
        assert_eq!(seen.version, 2);
        assert_eq!(seen.phase, SessionPhase::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_times_out_with_current_snapshot() {
        let channel = SnapshotChannel::new(snapshot(4, SessionPhase::Intro));

        let seen = channel.wait_newer_than(4, Duration::from_secs(1)).await;
        assert_eq!(seen.version, 4);
    }
}
