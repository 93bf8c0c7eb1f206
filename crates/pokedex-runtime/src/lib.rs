// Runtime layer
// Fetch cycle against the remote catalog, catalog state, and the interaction
// controller that owns every piece of mutable view state.

pub mod catalog;
pub mod client;
pub mod config;
pub mod connectivity;
pub mod controller;
pub mod error;
pub mod session;

pub use catalog::{CatalogState, FetchStatus, FetchTicket};
pub use client::{CatalogSource, FetchedCatalog, HttpCatalogSource, fetch_catalog};
pub use config::{Config, expand_tilde, resolve_data_dir};
pub use connectivity::{AlwaysOnline, Connectivity, TcpProbe};
pub use controller::{Controller, Effect, Event, SCROLL_THRESHOLD};
pub use error::{Error, ErrorKind, FetchError, Result, SourceError};
pub use session::Session;
