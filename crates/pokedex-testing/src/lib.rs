//! Testing infrastructure for pokedex integration tests.
//!
//! - `fixtures`: entity builders and sample catalogs
//! - `source`: scripted catalog source and connectivity signal
//! - `store`: preference store fixtures (read-only, temp SQLite)
//! - `server`: local HTTP stand-in for the remote API

pub mod fixtures;
pub mod server;
pub mod source;
pub mod store;

pub use fixtures::{EntityBuilder, entity, numbered_catalog, sample_catalog};
pub use server::{StubApi, StubApiConfig};
pub use source::{FixedConnectivity, MockCatalogSource};
pub use store::{ReadOnlyStore, TempDatabase};
