//! # Arena Client
//! A client for the arena card-battle service. It starts matches on the
//! server, keeps a server-authoritative snapshot of the running match in sync
//! on a fixed cadence, and projects that snapshot for a render layer.
//!
//! The client never simulates anything itself: elixir, movement, combat and
//! tower damage all happen on the server, and the last fetched snapshot is
//! the only truth the client knows.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub mod shared {
    pub use arena_shared::*;
}

pub mod transport;

mod catalog;
mod client_config;
mod error;
mod session;
mod sync;
mod view;

pub use catalog::CardCatalog;
pub use client_config::{
    parse_base_url, ClientConfig, BASE_URL_VAR, DEFAULT_BASE_URL, SYNC_INTERVAL_VAR,
};
pub use error::{CatalogError, ConfigError};
pub use session::{DeployFailurePolicy, DeployOutcome, LifecycleState, MatchSession, SessionError};
pub use sync::{PublishToken, SnapshotReader, SnapshotState, SnapshotStore, SyncConfig, SyncHealth, SyncLoop};
pub use transport::{Transport, TransportError};
pub use view::{
    elixir_fraction, elixir_gauge, lane_band, project, screen_x, ElixirGauge, LaneBand, TowerView,
    UnitView, ViewState,
};
