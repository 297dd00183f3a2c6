use serde::{Deserialize, Serialize};

use crate::{lane::Lane, types::Side};

/// Upper bound of the elixir economy as reported by the server
pub const ELIXIR_MAX: f64 = 10.0;

/// Progress value of a unit standing on the opposing tower
pub const LANE_LENGTH: f64 = 10.0;

/// The full authoritative state of a match at one instant.
///
/// A snapshot is only ever replaced as a whole; nothing in the client merges
/// two snapshots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    #[serde(default)]
    pub elixir: f64,
    /// Elapsed match time in seconds
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub towers: Vec<Tower>,
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl MatchSnapshot {
    pub fn towers_of(&self, side: Side) -> impl Iterator<Item = &Tower> {
        self.towers.iter().filter(move |tower| tower.side == side)
    }

    pub fn units_of(&self, side: Side) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |unit| unit.owner == side)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub side: Side,
    #[serde(default)]
    pub lane: Lane,
    pub hp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub owner: Side,
    #[serde(default)]
    pub lane: Lane,
    /// Progress along the lane, from 0 at the owner's side to `LANE_LENGTH`
    pub x: f64,
}
