//! Local HTTP stand-in for the remote catalog API.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use pokedex_types::Entity;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::fixtures::detail_json;

/// Behaviour of a [`StubApi`].
#[derive(Debug, Clone, Default)]
pub struct StubApiConfig {
    pub entities: Vec<Entity>,
    /// Detail requests for these ids answer 500
    pub failing_ids: HashSet<u32>,
    /// Detail requests for these ids answer a payload without stats
    pub malformed_ids: HashSet<u32>,
    /// When set, the list endpoint answers with this status
    pub list_status: Option<u16>,
}

impl StubApiConfig {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            ..Self::default()
        }
    }

    pub fn failing(mut self, id: u32) -> Self {
        self.failing_ids.insert(id);
        self
    }

    pub fn malformed(mut self, id: u32) -> Self {
        self.malformed_ids.insert(id);
        self
    }

    pub fn list_status(mut self, status: u16) -> Self {
        self.list_status = Some(status);
        self
    }
}

struct StubState {
    base_url: String,
    config: StubApiConfig,
}

#[derive(serde::Deserialize)]
struct ListQuery {
    limit: Option<usize>,
}

/// Serves `/pokemon?limit=N` and `/pokemon/{id}` on an ephemeral local port.
pub struct StubApi {
    base_url: String,
    handle: JoinHandle<()>,
}

impl StubApi {
    pub async fn start(config: StubApiConfig) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{addr}/api/v2");

        let state = Arc::new(StubState {
            base_url: base_url.clone(),
            config,
        });
        let app = Router::new()
            .route("/api/v2/pokemon", get(list_handler))
            .route("/api/v2/pokemon/{id}", get(detail_handler))
            .with_state(state);

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                eprintln!("stub api stopped: {err}");
            }
        });

        Ok(Self { base_url, handle })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn list_handler(
    State(state): State<Arc<StubState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    if let Some(status) = state.config.list_status {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, "list unavailable").into_response();
    }

    let limit = query.limit.unwrap_or(20);
    let results: Vec<_> = state
        .config
        .entities
        .iter()
        .take(limit)
        .map(|e| {
            json!({
                "name": e.name,
                "url": format!("{}/pokemon/{}", state.base_url, e.id),
            })
        })
        .collect();

    Json(json!({
        "count": state.config.entities.len(),
        "next": null,
        "previous": null,
        "results": results,
    }))
    .into_response()
}

async fn detail_handler(State(state): State<Arc<StubState>>, Path(id): Path<u32>) -> Response {
    if state.config.failing_ids.contains(&id) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    let Some(entity) = state.config.entities.iter().find(|e| e.id.get() == id) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    let mut body = detail_json(entity);
    if state.config.malformed_ids.contains(&id)
        && let Some(object) = body.as_object_mut()
    {
        object.remove("stats");
    }
    Json(body).into_response()
}
