mod snapshot_store;
mod sync_config;
mod sync_health;
mod sync_loop;

pub use snapshot_store::{PublishToken, SnapshotReader, SnapshotState, SnapshotStore};
pub use sync_config::SyncConfig;
pub use sync_health::SyncHealth;
pub use sync_loop::SyncLoop;
