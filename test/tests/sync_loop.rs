//! Sync loop behaviour through a running MatchSession: cadence, single flight,
//! failure tolerance and discarding of results that arrive after a stop.

use std::time::Duration;

use arena_client::{transport::Route, ClientConfig, LifecycleState, MatchSession};
use arena_shared::{Lane, MatchId, MatchSnapshot, Receipt, Side};
use arena_test::{
    assert_current_snapshot, network_error, started, status_error, Call, ScriptedTransport,
    SnapshotBuilder,
};

const INTERVAL: Duration = Duration::from_millis(1000);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn initial_state() -> MatchSnapshot {
    SnapshotBuilder::new(5.0, 0.0).with_standard_towers().build()
}

fn m1() -> MatchId {
    MatchId::from("m1")
}

async fn running_session(transport: &ScriptedTransport) -> MatchSession {
    transport.push_match(Ok(started("m1", initial_state())));
    let mut session = MatchSession::new(transport.as_transport(), &ClientConfig::default());
    session.start("alice").await.unwrap();
    session
}

#[tokio::test(start_paused = true)]
async fn tick_publishes_fetched_snapshot() {
    init_logging();
    let transport = ScriptedTransport::new();
    let next = SnapshotBuilder::new(5.9, 1.0)
        .with_standard_towers()
        .unit(Side::Player, Lane::Center, 1.0)
        .build();
    transport.push_state(Ok(next.clone()));

    let started_at = tokio::time::Instant::now();
    let session = running_session(&transport).await;
    let mut reader = session.snapshots();

    // initial snapshot is current before any tick
    assert_current_snapshot!(reader, initial_state());
    assert_eq!(transport.advances_for(&m1()), 0);

    let published = reader.wait_for_revision(2).await.unwrap();

    assert_eq!(*published, next);
    assert!(started_at.elapsed() >= INTERVAL);
    assert_eq!(transport.advances_for(&m1()), 1);
    assert_eq!(transport.fetches_for(&m1()), 1);
    assert_eq!(session.sync_health().unwrap().published, 1);
}

#[tokio::test(start_paused = true)]
async fn failed_advance_keeps_prior_snapshot_and_loop_continues() {
    init_logging();
    let transport = ScriptedTransport::new();
    transport.push_advance(Err(network_error(Route::Advance(m1()))));
    let second_advance = transport.hold_advance();
    let next = SnapshotBuilder::new(6.0, 2.0).build();
    transport.push_state(Ok(next.clone()));

    let session = running_session(&transport).await;
    let mut reader = session.snapshots();

    transport
        .wait_until(|calls| {
            calls
                .iter()
                .filter(|call| matches!(call, Call::Advance(_)))
                .count()
                >= 2
        })
        .await;

    // the first cycle failed without fetching, nothing was published
    assert_eq!(transport.fetches_for(&m1()), 0);
    assert_eq!(reader.revision(), 1);
    assert_current_snapshot!(reader, initial_state());
    let health = session.sync_health().unwrap();
    assert_eq!(health.failed_cycles, 1);
    assert_eq!(health.consecutive_failures, 1);
    assert_eq!(session.lifecycle_state(), LifecycleState::Running);

    second_advance.succeed(Receipt::default());
    let published = reader.wait_for_revision(2).await.unwrap();

    assert_eq!(*published, next);
    let health = session.sync_health().unwrap();
    assert_eq!(health.consecutive_failures, 0);
    assert_eq!(health.published, 1);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_is_retried_on_next_tick() {
    init_logging();
    let transport = ScriptedTransport::new();
    transport.push_state(Err(status_error(Route::FetchState(m1()), 500)));
    let next = SnapshotBuilder::new(7.0, 2.0).build();
    transport.push_state(Ok(next.clone()));

    let session = running_session(&transport).await;
    let mut reader = session.snapshots();

    let published = reader.wait_for_revision(2).await.unwrap();

    assert_eq!(*published, next);
    assert_eq!(transport.advances_for(&m1()), 2);
    assert_eq!(transport.fetches_for(&m1()), 2);
    let health = session.sync_health().unwrap();
    assert_eq!(health.failed_cycles, 1);
    assert_eq!(
        health.last_error,
        Some(status_error(Route::FetchState(m1()), 500))
    );
}

#[tokio::test(start_paused = true)]
async fn tick_is_skipped_while_previous_cycle_in_flight() {
    init_logging();
    let transport = ScriptedTransport::new();
    let advance = transport.hold_advance();
    let next = SnapshotBuilder::new(8.0, 1.0).build();
    transport.push_state(Ok(next.clone()));

    let session = running_session(&transport).await;
    let mut reader = session.snapshots();

    transport
        .wait_until(|calls| calls.contains(&Call::Advance(m1())))
        .await;
    // three more ticks elapse while the first advance is unresolved
    tokio::time::sleep(INTERVAL * 3 + INTERVAL / 2).await;

    assert_eq!(transport.advances_for(&m1()), 1);
    let health = session.sync_health().unwrap();
    assert_eq!(health.cycles, 1);
    assert_eq!(health.skipped_ticks, 3);
    assert_eq!(reader.revision(), 1);

    advance.succeed(Receipt::default());
    let published = reader.wait_for_revision(2).await.unwrap();

    assert_eq!(*published, next);
    assert_eq!(transport.fetches_for(&m1()), 1);
}

#[tokio::test(start_paused = true)]
async fn stop_discards_result_arriving_later() {
    init_logging();
    let transport = ScriptedTransport::new();
    let fetch = transport.hold_state();

    let mut session = running_session(&transport).await;
    let reader = session.snapshots();

    transport
        .wait_until(|calls| calls.contains(&Call::FetchState(m1())))
        .await;
    session.stop();
    fetch.succeed(SnapshotBuilder::new(9.0, 3.0).build());
    tokio::time::sleep(INTERVAL * 5).await;

    assert_current_snapshot!(reader, initial_state());
    assert_eq!(reader.revision(), 1);
    assert_eq!(reader.match_id(), None);
    assert_eq!(session.lifecycle_state(), LifecycleState::Stopped);
    assert_eq!(transport.advances_for(&m1()), 1);
}

#[tokio::test(start_paused = true)]
async fn stop_during_advance_skips_fetch() {
    init_logging();
    let transport = ScriptedTransport::new();
    let advance = transport.hold_advance();

    let mut session = running_session(&transport).await;

    transport
        .wait_until(|calls| calls.contains(&Call::Advance(m1())))
        .await;
    session.stop();
    advance.succeed(Receipt::default());
    tokio::time::sleep(INTERVAL * 3).await;

    assert_eq!(transport.fetches_for(&m1()), 0);
    assert_eq!(transport.advances_for(&m1()), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_session_stops_syncing() {
    init_logging();
    let transport = ScriptedTransport::new();

    let session = running_session(&transport).await;
    let reader = session.snapshots();
    drop(session);

    tokio::time::sleep(INTERVAL * 3).await;

    assert_eq!(transport.advances_for(&m1()), 0);
    assert_eq!(reader.match_id(), None);
    assert_current_snapshot!(reader, initial_state());
}
