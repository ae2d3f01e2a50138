pub mod presentation_port;
pub mod snapshot_channel;

pub use presentation_port::PresentationPort;
pub use snapshot_channel::SnapshotChannel;

#[cfg(test)]
pub use presentation_port::MockPresentationPort;
