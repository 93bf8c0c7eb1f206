pub mod api;
pub mod domain;
pub mod error;
mod util;
pub mod vocabulary;

pub use api::{DetailResponse, EntityReference, ListResponse};
pub use domain::*;
pub use error::{Error, Result};
pub use util::*;
pub use vocabulary::{
    ALL_TYPES, PRIMARY_TYPES, SECONDARY_TYPES, TypeChip, find_type_chip, visible_type_filters,
};
