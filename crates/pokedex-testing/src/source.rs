//! Scripted stand-ins for the remote catalog and the connectivity signal.

use async_trait::async_trait;
use pokedex_runtime::{CatalogSource, Connectivity, SourceError};
use pokedex_types::{Entity, EntityReference};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory [`CatalogSource`] with failure and latency injection.
///
/// Reference URLs are `mock://<name>`. Counters record every call so tests
/// can assert that nothing was requested, or how many requests overlapped.
#[derive(Debug, Default)]
pub struct MockCatalogSource {
    entities: Vec<Entity>,
    list_failure: Option<SourceError>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    completion_order: Mutex<Vec<String>>,
}

impl MockCatalogSource {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            ..Self::default()
        }
    }

    /// The list request answers with this error.
    pub fn failing_list(mut self, status: u16) -> Self {
        self.list_failure = Some(SourceError::Status {
            url: "mock://list".to_string(),
            status,
        });
        self
    }

    /// The detail request for `name` fails.
    pub fn failing_detail(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// The detail request for `name` takes `delay` to settle.
    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    /// Every detail request takes `delay` to settle.
    pub fn with_uniform_delay(mut self, delay: Duration) -> Self {
        for entity in &self.entities {
            self.delays.insert(entity.name.clone(), delay);
        }
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    /// Highest number of detail requests observed in flight at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Names in the order their detail requests settled.
    pub fn completion_order(&self) -> Vec<String> {
        self.completion_order
            .lock()
            .map(|order| order.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn list(&self, limit: usize) -> Result<Vec<EntityReference>, SourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.list_failure {
            return Err(err.clone());
        }

        Ok(self
            .entities
            .iter()
            .take(limit)
            .map(|e| EntityReference::new(e.name.clone(), format!("mock://{}", e.name)))
            .collect())
    }

    async fn detail(&self, reference: &EntityReference) -> Result<Entity, SourceError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&reference.name) {
            tokio::time::sleep(*delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if let Ok(mut order) = self.completion_order.lock() {
            order.push(reference.name.clone());
        }

        if self.failing.contains(&reference.name) {
            return Err(SourceError::Status {
                url: reference.url.clone(),
                status: 500,
            });
        }

        self.entities
            .iter()
            .find(|e| e.name == reference.name)
            .cloned()
            .ok_or_else(|| SourceError::Status {
                url: reference.url.clone(),
                status: 404,
            })
    }
}

/// Connectivity signal with a fixed answer and a probe counter.
#[derive(Debug, Default)]
pub struct FixedConnectivity {
    online: bool,
    probes: AtomicUsize,
}

impl FixedConnectivity {
    pub fn online() -> Self {
        Self {
            online: true,
            probes: AtomicUsize::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            online: false,
            probes: AtomicUsize::new(0),
        }
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connectivity for FixedConnectivity {
    async fn is_online(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.online
    }
}
