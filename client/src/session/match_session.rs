use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

use arena_shared::{Card, DeployRequest, Lane, MatchId, Player, PlayerId, StartedMatch};

use crate::{
    session::{
        deploy::{DeployFailurePolicy, DeployOutcome},
        error::SessionError,
        lifecycle::LifecycleState,
    },
    sync::{SnapshotReader, SnapshotStore, SyncConfig, SyncHealth, SyncLoop},
    transport::Transport,
    ClientConfig,
};

/// Owns the player, the attached match and its sync loop.
///
/// The session is the only writer of lifecycle state and the only one that
/// attaches matches to the snapshot store; its sync loop is the only one that
/// publishes to it. Renderers read through `snapshots()` and `lifecycle()`.
pub struct MatchSession {
    transport: Arc<dyn Transport>,
    sync_config: SyncConfig,
    deploy_failure: DeployFailurePolicy,
    store: SnapshotStore,
    lifecycle: Arc<watch::Sender<LifecycleState>>,
    player: Option<Player>,
    sync_loop: Option<SyncLoop>,
}

impl MatchSession {
    pub fn new(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        let (lifecycle, _) = watch::channel(LifecycleState::Idle);
        Self {
            transport,
            sync_config: config.sync.clone(),
            deploy_failure: config.deploy_failure,
            store: SnapshotStore::new(),
            lifecycle: Arc::new(lifecycle),
            player: None,
            sync_loop: None,
        }
    }

    // Accessors

    pub fn lifecycle_state(&self) -> LifecycleState {
        *self.lifecycle.borrow()
    }

    /// Subscribe to lifecycle transitions
    pub fn lifecycle(&self) -> watch::Receiver<LifecycleState> {
        self.lifecycle.subscribe()
    }

    /// Read handle on the current snapshot
    pub fn snapshots(&self) -> SnapshotReader {
        self.store.reader()
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Id of the match the sync loop is bound to, while running
    pub fn match_id(&self) -> Option<&MatchId> {
        self.sync_loop.as_ref().map(SyncLoop::match_id)
    }

    pub fn sync_health(&self) -> Option<SyncHealth> {
        self.sync_loop.as_ref().map(SyncLoop::health)
    }

    // Lifecycle

    /// Starts a new match for `username` and begins syncing it.
    ///
    /// Any match already running is stopped first, so its loop can no longer
    /// publish by the time the new one is requested. The player is created on
    /// the first start and reused while the username stays the same. On
    /// success the match's initial snapshot is current before this returns.
    ///
    /// On failure, or if the returned future is dropped before it completes,
    /// the session is left `Idle` with no match attached.
    pub async fn start(&mut self, username: &str) -> Result<MatchId, SessionError> {
        self.halt_sync();
        self.set_lifecycle(LifecycleState::Starting);
        let _starting = StartingGuard {
            lifecycle: self.lifecycle.clone(),
        };

        let StartedMatch { match_id, state } = match self.request_match(username).await {
            Ok(started) => started,
            Err(error) => {
                warn!("could not start match for {}: {}", username, error);
                return Err(error);
            }
        };

        let token = self.store.attach(match_id.clone(), state);
        self.sync_loop = Some(SyncLoop::start(
            self.transport.clone(),
            match_id.clone(),
            token,
            self.store.clone(),
            &self.sync_config,
        ));
        self.set_lifecycle(LifecycleState::Running);
        info!("match {} running", match_id);

        Ok(match_id)
    }

    /// Halts the sync loop and detaches the match. The last snapshot stays
    /// readable. Idempotent.
    pub fn stop(&mut self) {
        self.halt_sync();
        if self.set_lifecycle(LifecycleState::Stopped) {
            info!("session stopped");
        }
    }

    // Actions

    /// Asks the server to deploy `card` in `lane`.
    ///
    /// Does nothing unless the session is running. The current snapshot is
    /// never touched: whether the deploy took effect shows up in a later
    /// fetch. Failures are handled according to the configured
    /// `DeployFailurePolicy`.
    pub async fn deploy(&self, card: &Card, lane: Lane) -> Result<DeployOutcome, SessionError> {
        let match_id = match (self.lifecycle_state(), self.match_id()) {
            (LifecycleState::Running, Some(match_id)) => match_id.clone(),
            (state, _) => {
                debug!("deploy of {} ignored: session is {}", card.card_id, state);
                return Ok(DeployOutcome::NotRunning);
            }
        };

        let request = DeployRequest {
            match_id,
            card_id: card.card_id.clone(),
            lane,
        };

        match self.transport.deploy(&request).await {
            Ok(receipt) => {
                debug!("deployed {} to {} lane: {:?}", card.card_id, lane, receipt);
                Ok(DeployOutcome::Sent(receipt))
            }
            Err(error) => match self.deploy_failure {
                DeployFailurePolicy::Log => {
                    warn!("deploy of {} to {} lane failed: {}", card.card_id, lane, error);
                    Ok(DeployOutcome::Dropped)
                }
                DeployFailurePolicy::Ignore => {
                    debug!("deploy of {} to {} lane failed: {}", card.card_id, lane, error);
                    Ok(DeployOutcome::Dropped)
                }
                DeployFailurePolicy::Surface => Err(SessionError::Deploy(error)),
            },
        }
    }

    // Private

    async fn request_match(&mut self, username: &str) -> Result<StartedMatch, SessionError> {
        let player_id = self.ensure_player(username).await?;
        self.transport
            .start_match(&player_id)
            .await
            .map_err(SessionError::StartMatch)
    }

    async fn ensure_player(&mut self, username: &str) -> Result<PlayerId, SessionError> {
        if let Some(player) = self
            .player
            .as_ref()
            .filter(|player| player.username == username)
        {
            return Ok(player.player_id.clone());
        }

        let player = self
            .transport
            .create_player(username)
            .await
            .map_err(SessionError::CreatePlayer)?;
        info!("created player {} ({})", player.username, player.player_id);

        let player_id = player.player_id.clone();
        self.player = Some(player);
        Ok(player_id)
    }

    fn halt_sync(&mut self) {
        if let Some(mut sync_loop) = self.sync_loop.take() {
            sync_loop.stop();
        }
    }

    /// Returns whether the state actually changed
    fn set_lifecycle(&self, next: LifecycleState) -> bool {
        self.lifecycle.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            debug!("session {} -> {}", state, next);
            *state = next;
            true
        })
    }
}

/// Returns the session to `Idle` if `start` ends without reaching `Running`
struct StartingGuard {
    lifecycle: Arc<watch::Sender<LifecycleState>>,
}

impl Drop for StartingGuard {
    fn drop(&mut self) {
        self.lifecycle.send_if_modified(|state| {
            if *state != LifecycleState::Starting {
                return false;
            }
            debug!("session {} -> {}", state, LifecycleState::Idle);
            *state = LifecycleState::Idle;
            true
        });
    }
}
