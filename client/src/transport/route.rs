use std::fmt;

use url::Url;

use arena_shared::MatchId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// One remote capability of the match service
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Seed,
    CreatePlayer,
    ListCards,
    StartMatch,
    Deploy,
    Advance(MatchId),
    FetchState(MatchId),
}

impl Route {
    pub fn method(&self) -> HttpMethod {
        match self {
            Route::ListCards | Route::FetchState(_) => HttpMethod::Get,
            Route::Seed
            | Route::CreatePlayer
            | Route::StartMatch
            | Route::Deploy
            | Route::Advance(_) => HttpMethod::Post,
        }
    }

    pub fn segments(&self) -> Vec<&str> {
        match self {
            Route::Seed => vec!["seed"],
            Route::CreatePlayer => vec!["player"],
            Route::ListCards => vec!["cards"],
            Route::StartMatch => vec!["match", "start"],
            Route::Deploy => vec!["match", "deploy"],
            Route::Advance(match_id) => vec!["match", "tick", match_id.as_str()],
            Route::FetchState(match_id) => vec!["match", "state", match_id.as_str()],
        }
    }

    /// Resolves this route under `base`, percent-encoding every segment.
    ///
    /// `base` must be able to carry a path, which `ClientConfig` guarantees.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(self.segments());
        }
        url
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method(), self.segments().join("/"))
    }
}
