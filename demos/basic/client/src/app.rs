use std::{error::Error, sync::Arc};

use log::{info, warn};

use arena_client::{
    shared::Lane, transport::http::HttpTransport, CardCatalog, ClientConfig, DeployOutcome,
    MatchSession, SnapshotReader,
};

/// Deploy one card every this many snapshot updates
const DEPLOY_EVERY: u32 = 3;

pub struct App {
    session: MatchSession,
    catalog: CardCatalog,
    snapshots: SnapshotReader,
    update_count: u32,
    next_card: usize,
}

impl App {
    pub async fn new(username: &str) -> Result<Self, Box<dyn Error>> {
        info!("Basic Arena Client Demo started");

        let config = ClientConfig::from_env()?;
        info!("match service at {}", config.base_url);
        let transport = Arc::new(HttpTransport::new(&config));

        let catalog = CardCatalog::load(transport.as_ref(), config.seed_catalog).await?;
        for card in &catalog {
            info!("card {} ({}) costs {}", card.name, card.card_id, card.cost);
        }

        let mut session = MatchSession::new(transport, &config);
        let match_id = session.start(username).await?;
        info!("{} joined match {}", username, match_id);

        let snapshots = session.snapshots();

        Ok(App {
            session,
            catalog,
            snapshots,
            update_count: 0,
            next_card: 0,
        })
    }

    /// Logs every new snapshot and deploys cards round-robin across lanes
    pub async fn run(&mut self) {
        self.log_view();

        while self.snapshots.changed().await {
            if !self.session.lifecycle_state().is_running() {
                break;
            }
            self.update_count += 1;
            self.log_view();

            if self.update_count % DEPLOY_EVERY == 0 {
                self.deploy_next().await;
            }
        }
    }

    pub fn stop(&mut self) {
        self.session.stop();
        if let Some(health) = self.session.sync_health() {
            info!("sync health at stop: {:?}", health);
        }
        info!("Basic Arena Client Demo stopped");
    }

    fn log_view(&self) {
        let Some(view) = self.snapshots.view() else {
            return;
        };

        info!(
            "t={:.1}s elixir {} ({:.0}%) towers {} units {}",
            view.elapsed,
            view.elixir.display,
            view.elixir.fraction * 100.0,
            view.towers.len(),
            view.units.len(),
        );
        for unit in &view.units {
            info!(
                "  {} unit in {} lane at x={:.2}",
                unit.owner, unit.lane, unit.x
            );
        }
    }

    async fn deploy_next(&mut self) {
        if self.catalog.is_empty() {
            return;
        }

        let Some(card) = self.catalog.iter().nth(self.next_card % self.catalog.len()) else {
            return;
        };
        let lane = Lane::ALL[self.next_card % Lane::ALL.len()];
        self.next_card += 1;

        match self.session.deploy(card, lane).await {
            Ok(DeployOutcome::Sent(_)) => info!("Client send -> {} to {} lane", card.name, lane),
            Ok(outcome) => warn!("deploy of {} not sent: {:?}", card.name, outcome),
            Err(error) => warn!("{}", error),
        }
    }
}
