use std::fmt;

/// Result type for pokedex-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Preference store error
    Store(pokedex_store::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client could not be constructed
    Client(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "Store error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Client(err) => write!(f, "HTTP client error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Client(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<pokedex_store::Error> for Error {
    fn from(err: pokedex_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Classification of a failed fetch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No connectivity when the cycle started; nothing was requested
    Offline,
    /// The reference list request failed or returned a non-success status
    ListFetchFailed,
    /// A single detail request failed; recovered inside the cycle
    EntityFetchFailed,
}

/// Failure of a fetch cycle (or of one of its detail requests).
///
/// `Display` is the user-facing message; the underlying cause is kept as the source.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<SourceError>,
}

impl FetchError {
    pub fn offline() -> Self {
        Self {
            kind: ErrorKind::Offline,
            message: "You are offline. Please check your connection.".to_string(),
            source: None,
        }
    }

    pub fn list_failed(cause: SourceError) -> Self {
        Self {
            kind: ErrorKind::ListFetchFailed,
            message: "Failed to fetch Pokemon list".to_string(),
            source: Some(cause),
        }
    }

    pub fn entity_failed(name: &str, cause: SourceError) -> Self {
        Self {
            kind: ErrorKind::EntityFetchFailed,
            message: format!("Failed to fetch {}", name),
            source: Some(cause),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn cause(&self) -> Option<&SourceError> {
        self.source.as_ref()
    }
}

/// Failure reported by a [`crate::CatalogSource`] for a single request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Request never produced a response
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Response body did not match the expected shape
    #[error("unexpected payload from {url}: {message}")]
    Decode { url: String, message: String },

    /// Payload parsed but violates the entity invariants
    #[error(transparent)]
    Invalid(#[from] pokedex_types::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_list_failure_keeps_cause() {
        let err = FetchError::list_failed(SourceError::Status {
            url: "https://pokeapi.co/api/v2/pokemon?limit=151".to_string(),
            status: 503,
        });

        assert_eq!(err.kind(), ErrorKind::ListFetchFailed);
        assert_eq!(err.to_string(), "Failed to fetch Pokemon list");
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("HTTP 503"));
    }

    #[test]
    fn test_offline_has_no_cause() {
        let err = FetchError::offline();
        assert_eq!(err.kind(), ErrorKind::Offline);
        assert!(err.cause().is_none());
        assert!(err.to_string().contains("offline"));
    }

    #[test]
    fn test_entity_failure_names_entity() {
        let err = FetchError::entity_failed(
            "mew",
            SourceError::Transport {
                url: "https://pokeapi.co/api/v2/pokemon/151/".to_string(),
                message: "connection reset".to_string(),
            },
        );
        assert_eq!(err.kind(), ErrorKind::EntityFetchFailed);
        assert_eq!(err.to_string(), "Failed to fetch mew");
    }
}
