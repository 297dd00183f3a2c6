cfg_if! {
    if #[cfg(feature = "transport_http")] {
        pub mod http;
    } else {}
}

mod error;
mod route;

pub use error::TransportError;
pub use route::{HttpMethod, Route};
pub use inner::Transport;

mod inner {

    use async_trait::async_trait;

    use arena_shared::{Card, DeployRequest, MatchId, MatchSnapshot, Player, PlayerId, Receipt, StartedMatch};

    use super::TransportError;

    /// Outbound calls to the match service, one per remote capability.
    ///
    /// Implementations perform exactly one network call per invocation and
    /// carry no retry, caching or business logic: every failure goes back to
    /// the caller as a `TransportError`.
    #[async_trait]
    pub trait Transport: Send + Sync {
        /// Asks the service to seed its card catalog
        async fn seed(&self) -> Result<(), TransportError>;
        /// Creates a player identity for `username`
        async fn create_player(&self, username: &str) -> Result<Player, TransportError>;
        /// Reads the card catalog
        async fn list_cards(&self) -> Result<Vec<Card>, TransportError>;
        /// Starts a new match for `player_id`, returning its first snapshot
        async fn start_match(&self, player_id: &PlayerId) -> Result<StartedMatch, TransportError>;
        /// Requests a card deployment
        async fn deploy(&self, request: &DeployRequest) -> Result<Receipt, TransportError>;
        /// Asks the server to advance the simulation of `match_id` by one step
        async fn advance(&self, match_id: &MatchId) -> Result<Receipt, TransportError>;
        /// Reads the current authoritative state of `match_id`
        async fn fetch_state(&self, match_id: &MatchId) -> Result<MatchSnapshot, TransportError>;
    }
}
