use std::sync::Arc;

use tokio::sync::watch;

use arena_shared::{MatchId, MatchSnapshot};

use crate::view::{project, ViewState};

/// What readers see: the attached match and its current snapshot
#[derive(Clone, Debug, Default)]
pub struct SnapshotState {
    generation: u64,
    match_id: Option<MatchId>,
    snapshot: Option<Arc<MatchSnapshot>>,
    revision: u64,
}

impl SnapshotState {
    pub fn match_id(&self) -> Option<&MatchId> {
        self.match_id.as_ref()
    }

    pub fn snapshot(&self) -> Option<&Arc<MatchSnapshot>> {
        self.snapshot.as_ref()
    }

    /// Number of snapshots made current so far, initial ones included
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Proof that a writer belongs to the match attached when it was issued.
///
/// Every attach or detach starts a new generation, which turns all
/// previously issued tokens stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublishToken {
    generation: u64,
}

/// Owner of the current snapshot.
///
/// All writes go through the watch channel's lock, so a detach and a publish
/// can never interleave: once `detach` returns, a stale token can no longer
/// change what readers see.
#[derive(Clone)]
pub struct SnapshotStore {
    sender: Arc<watch::Sender<SnapshotState>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SnapshotState::default());
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn reader(&self) -> SnapshotReader {
        SnapshotReader {
            receiver: self.sender.subscribe(),
        }
    }

    /// Makes `match_id` the attached match with `initial` as its current
    /// snapshot, invalidating every earlier token.
    pub fn attach(&self, match_id: MatchId, initial: MatchSnapshot) -> PublishToken {
        let mut generation = 0;
        self.sender.send_modify(|state| {
            state.generation += 1;
            state.match_id = Some(match_id);
            state.snapshot = Some(Arc::new(initial));
            state.revision += 1;
            generation = state.generation;
        });
        PublishToken { generation }
    }

    /// Replaces the current snapshot as a whole. Returns `false`, leaving the
    /// state untouched, if `token` is stale.
    pub fn publish(&self, token: PublishToken, snapshot: MatchSnapshot) -> bool {
        self.sender.send_if_modified(|state| {
            if state.generation != token.generation {
                return false;
            }
            state.snapshot = Some(Arc::new(snapshot));
            state.revision += 1;
            true
        })
    }

    /// Clears the attached match if `token` still owns it. The last snapshot
    /// stays current.
    pub fn detach(&self, token: PublishToken) -> bool {
        self.sender.send_if_modified(|state| {
            if state.generation != token.generation {
                return false;
            }
            state.generation += 1;
            state.match_id = None;
            true
        })
    }

    pub fn is_current(&self, token: PublishToken) -> bool {
        self.sender.borrow().generation == token.generation
    }
}

/// Read-only handle on the current snapshot, cheap to clone
#[derive(Clone)]
pub struct SnapshotReader {
    receiver: watch::Receiver<SnapshotState>,
}

impl SnapshotReader {
    pub fn state(&self) -> SnapshotState {
        self.receiver.borrow().clone()
    }

    pub fn current(&self) -> Option<Arc<MatchSnapshot>> {
        self.receiver.borrow().snapshot.clone()
    }

    pub fn match_id(&self) -> Option<MatchId> {
        self.receiver.borrow().match_id.clone()
    }

    pub fn revision(&self) -> u64 {
        self.receiver.borrow().revision
    }

    /// The current snapshot projected for rendering
    pub fn view(&self) -> Option<ViewState> {
        self.receiver
            .borrow()
            .snapshot
            .as_deref()
            .map(project)
    }

    /// Waits until the state changes after the last time this reader looked.
    /// Returns `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }

    /// Waits until at least `revision` snapshots have been made current
    pub async fn wait_for_revision(&mut self, revision: u64) -> Option<Arc<MatchSnapshot>> {
        let state = self
            .receiver
            .wait_for(|state| state.revision >= revision)
            .await
            .ok()?;
        state.snapshot.clone()
    }
}
