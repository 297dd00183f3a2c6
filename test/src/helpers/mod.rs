pub mod fixtures;

pub use fixtures::{card, network_error, player, started, status_error};
pub use snapshot_builder::SnapshotBuilder;
