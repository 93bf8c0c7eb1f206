use crate::client::FetchedCatalog;
use crate::error::FetchError;
use chrono::{DateTime, Utc};
use pokedex_types::{Entity, EntityId};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Loading,
    Ready,
    Error,
}

/// Handle for one fetch cycle. Only the most recently issued ticket can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a fetch cycle must be completed with its ticket"]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// In-memory catalog. Replaced as a whole at the end of a successful cycle,
/// left untouched by a failed one.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogState {
    entities: Vec<Entity>,
    status: FetchStatus,
    error_message: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
    dropped: usize,
    #[serde(skip)]
    version: u64,
    #[serde(skip)]
    generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            status: FetchStatus::Loading,
            error_message: None,
            loaded_at: None,
            dropped: 0,
            version: 0,
            generation: 0,
        }
    }

    /// Start a cycle: clears any previous error and supersedes earlier tickets.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        self.error_message = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of the cycle behind `ticket`.
    ///
    /// Returns false (and changes nothing) when a newer cycle has begun since.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<FetchedCatalog, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding superseded fetch result"
            );
            return false;
        }

        match result {
            Ok(fetched) => {
                self.entities = unique_by_id(fetched.entities);
                self.dropped = fetched.dropped;
                self.loaded_at = Some(Utc::now());
                self.status = FetchStatus::Ready;
                self.error_message = None;
                self.version += 1;
            }
            Err(err) => {
                tracing::warn!(kind = ?err.kind(), error = %err, "fetch cycle failed");
                self.status = FetchStatus::Error;
                self.error_message = Some(err.to_string());
            }
        }
        true
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Retry is offered whenever the last cycle failed.
    pub fn can_retry(&self) -> bool {
        self.status == FetchStatus::Error
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Entities dropped by the last successful cycle
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Bumped whenever the entity set is replaced
    pub fn version(&self) -> u64 {
        self.version
    }
}

fn unique_by_id(entities: Vec<Entity>) -> Vec<Entity> {
    let mut seen = HashSet::with_capacity(entities.len());
    entities.into_iter().filter(|e| seen.insert(e.id)).collect()
}
