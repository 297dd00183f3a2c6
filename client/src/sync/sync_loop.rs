use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use log::{debug, info, warn};
use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use arena_shared::{MatchId, MatchSnapshot};

use crate::{
    sync::{
        snapshot_store::{PublishToken, SnapshotStore},
        sync_config::SyncConfig,
        sync_health::{SyncHealth, SyncStats},
    },
    transport::{Transport, TransportError},
};

/// Timed driver that keeps one match's snapshot in sync with the server.
///
/// Every `interval` it runs a cycle: advance the match, then fetch its state,
/// then publish the result. At most one cycle is in flight at any time; a tick
/// that finds the previous cycle unfinished is skipped rather than queued, so
/// snapshots are published in the order their cycles were issued.
///
/// Stopping (or dropping) the loop cancels the timer and invalidates its
/// publish token. A cycle that is still waiting on the network when that
/// happens will find its result discarded.
pub struct SyncLoop {
    match_id: MatchId,
    token: PublishToken,
    store: SnapshotStore,
    stats: Arc<SyncStats>,
    stall_threshold: u32,
    driver: Option<JoinHandle<()>>,
}

impl SyncLoop {
    /// Spawns the driver on the current tokio runtime. The first cycle runs
    /// one `interval` from now.
    pub fn start(
        transport: Arc<dyn Transport>,
        match_id: MatchId,
        token: PublishToken,
        store: SnapshotStore,
        config: &SyncConfig,
    ) -> Self {
        let stats = Arc::new(SyncStats::default());
        let cycle = Cycle {
            transport,
            match_id: match_id.clone(),
            token,
            store: store.clone(),
            stats: stats.clone(),
            in_flight: Arc::new(AtomicBool::new(false)),
        };

        let driver = tokio::spawn(drive(cycle, config.interval));
        info!(
            "sync loop for match {} started, interval {:?}",
            match_id, config.interval
        );

        Self {
            match_id,
            token,
            store,
            stats,
            stall_threshold: config.stall_threshold,
            driver: Some(driver),
        }
    }

    pub fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_some() && self.store.is_current(self.token)
    }

    pub fn health(&self) -> SyncHealth {
        self.stats.health(self.stall_threshold)
    }

    /// Idempotent
    pub fn stop(&mut self) {
        let Some(driver) = self.driver.take() else {
            return;
        };
        driver.abort();
        self.store.detach(self.token);
        info!("sync loop for match {} stopped", self.match_id);
    }
}

impl Drop for SyncLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn drive(cycle: Cycle, interval: Duration) {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        if !cycle.store.is_current(cycle.token) {
            debug!("match {} is no longer attached, sync driver exiting", cycle.match_id);
            return;
        }
        cycle.stats.record_tick();

        let Some(guard) = InFlightGuard::acquire(&cycle.in_flight) else {
            cycle.stats.record_skip();
            debug!(
                "skipping tick for match {}: previous cycle still in flight",
                cycle.match_id
            );
            continue;
        };
        cycle.stats.record_cycle();

        let cycle = cycle.clone();
        tokio::spawn(async move {
            let _guard = guard;
            cycle.run().await;
        });
    }
}

/// Single-flight marker, released when the owning cycle finishes or is dropped
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        if flag.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(Self { flag: flag.clone() })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[derive(Clone)]
struct Cycle {
    transport: Arc<dyn Transport>,
    match_id: MatchId,
    token: PublishToken,
    store: SnapshotStore,
    stats: Arc<SyncStats>,
    in_flight: Arc<AtomicBool>,
}

impl Cycle {
    async fn run(&self) {
        match self.advance_and_fetch().await {
            Ok(Some(snapshot)) => {
                if self.store.publish(self.token, snapshot) {
                    self.stats.record_published();
                } else {
                    debug!("discarding snapshot of detached match {}", self.match_id);
                }
            }
            Ok(None) => {
                debug!("match {} detached mid-cycle, fetch skipped", self.match_id);
            }
            Err(error) => {
                if !self.store.is_current(self.token) {
                    debug!("ignoring failure of detached match {}: {}", self.match_id, error);
                    return;
                }
                warn!("sync cycle for match {} failed: {}", self.match_id, error);
                self.stats.record_failure(error);
            }
        }
    }

    async fn advance_and_fetch(&self) -> Result<Option<MatchSnapshot>, TransportError> {
        let receipt = self.transport.advance(&self.match_id).await?;
        debug!("advanced match {}: {:?}", self.match_id, receipt);

        if !self.store.is_current(self.token) {
            return Ok(None);
        }

        let snapshot = self.transport.fetch_state(&self.match_id).await?;
        Ok(Some(snapshot))
    }
}
