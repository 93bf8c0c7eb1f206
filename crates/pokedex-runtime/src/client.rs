use crate::config::Config;
use crate::error::{FetchError, SourceError};
use crate::{Error, Result};
use async_trait::async_trait;
use futures::future::join_all;
use pokedex_types::{DetailResponse, Entity, EntityReference, ListResponse};
use reqwest::Client;
use std::time::Duration;

/// Remote data source: one list endpoint plus one detail URL per reference.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list(&self, limit: usize) -> std::result::Result<Vec<EntityReference>, SourceError>;

    async fn detail(
        &self,
        reference: &EntityReference,
    ) -> std::result::Result<Entity, SourceError>;
}

/// Output of a successful fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedCatalog {
    /// Resolved entities in reference-list order
    pub entities: Vec<Entity>,
    /// Detail requests that failed and were dropped
    pub dropped: usize,
}

/// Run one list-then-details fetch.
///
/// Details are requested concurrently and every request is awaited to
/// completion; individual failures only shrink the result. An empty result
/// is a success.
pub async fn fetch_catalog<S, C>(
    source: &S,
    connectivity: &C,
    page_limit: usize,
) -> std::result::Result<FetchedCatalog, FetchError>
where
    S: CatalogSource + ?Sized,
    C: crate::Connectivity + ?Sized,
{
    if !connectivity.is_online().await {
        tracing::info!("offline; skipping catalog fetch");
        return Err(FetchError::offline());
    }

    let references = source.list(page_limit).await.map_err(|cause| {
        tracing::warn!(error = %cause, "reference list fetch failed");
        FetchError::list_failed(cause)
    })?;

    let outcomes = join_all(references.iter().map(|reference| source.detail(reference))).await;

    let mut entities = Vec::with_capacity(references.len());
    let mut dropped = 0;
    for (reference, outcome) in references.iter().zip(outcomes) {
        match outcome {
            Ok(entity) => entities.push(entity),
            Err(cause) => {
                dropped += 1;
                let err = FetchError::entity_failed(&reference.name, cause);
                tracing::debug!(
                    entity = %reference.name,
                    error = %err,
                    cause = ?err.cause(),
                    "dropping entity"
                );
            }
        }
    }

    tracing::info!(
        requested = references.len(),
        resolved = entities.len(),
        dropped,
        "catalog fetched"
    );

    Ok(FetchedCatalog { entities, dropped })
}

/// [`CatalogSource`] over HTTP.
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| SourceError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|err| SourceError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn list(&self, limit: usize) -> std::result::Result<Vec<EntityReference>, SourceError> {
        let url = format!("{}/pokemon?limit={}", self.base_url, limit);
        let list: ListResponse = self.get_json(&url).await?;
        Ok(list.results)
    }

    async fn detail(
        &self,
        reference: &EntityReference,
    ) -> std::result::Result<Entity, SourceError> {
        let detail: DetailResponse = self.get_json(&reference.url).await?;
        Ok(Entity::try_from(detail)?)
    }
}
