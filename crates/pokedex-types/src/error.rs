/// Result type for pokedex-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a detail payload cannot become an [`crate::Entity`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Catalog ids start at 1
    #[error("invalid id {0} for {1}")]
    InvalidId(i64, String),

    /// Stats must fill exactly six slots
    #[error("{name} has {found} stats, expected 6")]
    StatSlots { name: String, found: usize },

    /// A base stat fell outside 0..=255
    #[error("{name}: stat {stat} has base value {value} outside 0..=255")]
    StatOutOfRange {
        name: String,
        stat: String,
        value: i64,
    },

    /// Height or weight was negative
    #[error("{name}: negative {field} {value}")]
    NegativeMeasure {
        name: String,
        field: &'static str,
        value: i64,
    },
}
