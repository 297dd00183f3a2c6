//! # Arena Shared
//! Wire data model of the arena match service, shared between arena-client
//! and its test harness.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod lane;
mod messages;
mod snapshot;
mod types;

pub use lane::{Lane, LaneError, LANE_COUNT};
pub use messages::{
    Card, CardList, CreatePlayerRequest, DeployRequest, Player, Receipt, StartMatchRequest,
    StartedMatch,
};
pub use snapshot::{MatchSnapshot, Tower, Unit, ELIXIR_MAX, LANE_LENGTH};
pub use types::{CardId, MatchId, PlayerId, Side};
