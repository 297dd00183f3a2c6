use arena_client::transport::{Route, TransportError};
use arena_shared::{Card, CardId, MatchId, MatchSnapshot, Player, PlayerId, StartedMatch};

pub fn player(id: &str, username: &str) -> Player {
    Player {
        player_id: PlayerId::from(id),
        username: username.to_string(),
    }
}

pub fn card(id: &str, cost: u32) -> Card {
    Card {
        card_id: CardId::from(id),
        name: id.to_string(),
        cost,
        role: "troop".to_string(),
    }
}

pub fn started(match_id: &str, state: MatchSnapshot) -> StartedMatch {
    StartedMatch {
        match_id: MatchId::from(match_id),
        state,
    }
}

pub fn network_error(route: Route) -> TransportError {
    TransportError::Network {
        route,
        reason: "connection refused".to_string(),
    }
}

pub fn status_error(route: Route, status: u16) -> TransportError {
    TransportError::Status { route, status }
}
