use crate::catalog::FetchStatus;
use crate::client::{CatalogSource, HttpCatalogSource, fetch_catalog};
use crate::config::Config;
use crate::connectivity::{AlwaysOnline, Connectivity, TcpProbe};
use crate::controller::{Controller, Effect, Event};
use crate::Result;
use pokedex_store::{Database, PreferenceStore};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Controller plus the collaborators needed to run fetch cycles.
pub struct Session<P: PreferenceStore> {
    controller: Controller<P>,
    source: Arc<dyn CatalogSource>,
    connectivity: Arc<dyn Connectivity>,
    page_limit: usize,
}

impl Session<Database> {
    /// Production wiring: SQLite preferences in `data_dir`, HTTP source and
    /// TCP probe derived from `config`.
    pub fn open(config: &Config, data_dir: &Path) -> Result<Self> {
        let store = Database::open(&Config::database_path_in(data_dir))?;
        let source = HttpCatalogSource::from_config(config)?;

        let probe = config
            .connectivity_probe
            .then(|| TcpProbe::for_url(&config.api_base_url, PROBE_TIMEOUT))
            .flatten();
        let connectivity: Arc<dyn Connectivity> = match probe {
            Some(probe) => Arc::new(probe),
            None => Arc::new(AlwaysOnline),
        };

        Ok(Session::new(
            Controller::new(store),
            Arc::new(source),
            connectivity,
            config.page_limit,
        ))
    }
}

impl<P: PreferenceStore> Session<P> {
    pub fn new(
        controller: Controller<P>,
        source: Arc<dyn CatalogSource>,
        connectivity: Arc<dyn Connectivity>,
        page_limit: usize,
    ) -> Self {
        Self {
            controller,
            source,
            connectivity,
            page_limit,
        }
    }

    /// Run a full fetch cycle (initial load or retry) and return the resulting status.
    pub async fn refresh(&mut self) -> FetchStatus {
        let ticket = self.controller.retry_fetch();
        self.run_fetch(ticket).await
    }

    /// Apply an event, running the fetch cycle it requests, if any.
    pub async fn dispatch(&mut self, event: Event) {
        if let Effect::Fetch(ticket) = self.controller.apply(event) {
            self.run_fetch(ticket).await;
        }
    }

    async fn run_fetch(&mut self, ticket: crate::FetchTicket) -> FetchStatus {
        tracing::info!(generation = ticket.generation(), limit = self.page_limit, "fetch cycle started");
        let result = fetch_catalog(
            self.source.as_ref(),
            self.connectivity.as_ref(),
            self.page_limit,
        )
        .await;
        self.controller.complete_fetch(ticket, result);
        self.controller.catalog().status()
    }

    pub fn controller(&self) -> &Controller<P> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<P> {
        &mut self.controller
    }

    pub fn page_limit(&self) -> usize {
        self.page_limit
    }
}
