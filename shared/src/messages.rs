//! Request and response bodies of the match service.

use serde::{Deserialize, Serialize};

use crate::{
    lane::Lane,
    snapshot::MatchSnapshot,
    types::{CardId, MatchId, PlayerId},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub card_id: CardId,
    pub name: String,
    pub cost: u32,
    #[serde(default)]
    pub role: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardList {
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartMatchRequest {
    pub player_id: PlayerId,
}

/// Reply to a start request: the new match and its first snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartedMatch {
    pub match_id: MatchId,
    pub state: MatchSnapshot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub match_id: MatchId,
    pub card_id: CardId,
    pub lane: Lane,
}

/// Opaque acknowledgement returned by deploy and advance calls.
///
/// Its content is never merged into local state; the next fetched snapshot is
/// the only source of truth.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Receipt(pub serde_json::Value);
