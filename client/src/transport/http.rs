use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use arena_shared::{
    Card, CardList, CreatePlayerRequest, DeployRequest, MatchId, MatchSnapshot, Player,
    PlayerId, Receipt, StartMatchRequest, StartedMatch,
};

use crate::{
    transport::{HttpMethod, Route, Transport, TransportError},
    ClientConfig,
};

/// `Transport` over HTTP/JSON against the configured base address
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config.base_url.clone())
    }

    /// Use a preconfigured `reqwest::Client`, e.g. one with a request timeout
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, route: &Route) -> RequestBuilder {
        let url = route.url(&self.base_url);
        match route.method() {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        }
    }

    async fn send(&self, route: Route, builder: RequestBuilder) -> Result<Response, TransportError> {
        debug!("-> {}", route);
        let response = builder.send().await.map_err(|error| TransportError::Network {
            route: route.clone(),
            reason: error.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                route,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn call<T: DeserializeOwned>(&self, route: Route) -> Result<T, TransportError> {
        let builder = self.request(&route);
        let response = self.send(route.clone(), builder).await?;
        decode(route, response).await
    }

    async fn call_with<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        route: Route,
        body: &B,
    ) -> Result<T, TransportError> {
        let builder = self.request(&route).json(body);
        let response = self.send(route.clone(), builder).await?;
        decode(route, response).await
    }
}

async fn decode<T: DeserializeOwned>(route: Route, response: Response) -> Result<T, TransportError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|error| TransportError::Network {
            route: route.clone(),
            reason: error.to_string(),
        })?;

    // empty bodies decode as JSON null, which only `Receipt` accepts
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };

    serde_json::from_slice(body).map_err(|error| TransportError::Decode {
        route,
        reason: error.to_string(),
    })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn seed(&self) -> Result<(), TransportError> {
        let route = Route::Seed;
        let builder = self.request(&route);
        self.send(route, builder).await.map(|_| ())
    }

    async fn create_player(&self, username: &str) -> Result<Player, TransportError> {
        let body = CreatePlayerRequest {
            username: username.to_string(),
        };
        self.call_with(Route::CreatePlayer, &body).await
    }

    async fn list_cards(&self) -> Result<Vec<Card>, TransportError> {
        let list: CardList = self.call(Route::ListCards).await?;
        Ok(list.cards)
    }

    async fn start_match(&self, player_id: &PlayerId) -> Result<StartedMatch, TransportError> {
        let body = StartMatchRequest {
            player_id: player_id.clone(),
        };
        self.call_with(Route::StartMatch, &body).await
    }

    async fn deploy(&self, request: &DeployRequest) -> Result<Receipt, TransportError> {
        self.call_with(Route::Deploy, request).await
    }

    async fn advance(&self, match_id: &MatchId) -> Result<Receipt, TransportError> {
        self.call(Route::Advance(match_id.clone())).await
    }

    async fn fetch_state(&self, match_id: &MatchId) -> Result<MatchSnapshot, TransportError> {
        self.call(Route::FetchState(match_id.clone())).await
    }
}
