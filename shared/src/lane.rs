use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LANE_COUNT: usize = 3;

/// One of the three fixed lanes of the arena, top to bottom.
///
/// Units report their lane as an index and towers report it as a name, so
/// decoding accepts either form. Encoding always uses the index.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "WireLane", into = "u8")]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn index(self) -> u8 {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Index form used by units: anything past the first two lanes is the last one.
    pub fn from_index_lossy(index: i64) -> Self {
        match index {
            0 => Lane::Left,
            1 => Lane::Center,
            _ => Lane::Right,
        }
    }

    /// Name form used by towers: anything but the two flanks is the center.
    pub fn from_name_lossy(name: &str) -> Self {
        match name {
            "left" => Lane::Left,
            "right" => Lane::Right,
            _ => Lane::Center,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lane::Left => f.write_str("left"),
            Lane::Center => f.write_str("center"),
            Lane::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur when selecting a lane explicitly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneError {
    /// Lane index outside of the arena
    #[error("Lane index {index} is out of range. The arena has lanes 0, 1 and 2")]
    OutOfRange { index: u8 },
}

impl TryFrom<u8> for Lane {
    type Error = LaneError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Lane::Left),
            1 => Ok(Lane::Center),
            2 => Ok(Lane::Right),
            index => Err(LaneError::OutOfRange { index }),
        }
    }
}

impl From<Lane> for u8 {
    fn from(lane: Lane) -> Self {
        lane.index()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireLane {
    Index(i64),
    Number(f64),
    Name(String),
}

impl From<WireLane> for Lane {
    fn from(wire: WireLane) -> Self {
        match wire {
            WireLane::Index(index) => Lane::from_index_lossy(index),
            WireLane::Number(number) => Lane::from_index_lossy(number as i64),
            WireLane::Name(name) => Lane::from_name_lossy(&name),
        }
    }
}
