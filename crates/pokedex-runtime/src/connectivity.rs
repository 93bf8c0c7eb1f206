use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;

/// Answers "is the network reachable" before a fetch cycle issues any request.
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_online(&self) -> bool;
}

/// Gate that never blocks a fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

#[async_trait]
impl Connectivity for AlwaysOnline {
    async fn is_online(&self) -> bool {
        true
    }
}

/// Reports online when a TCP connection to the API host opens within `timeout`.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Probe the host serving `url`. `None` when the URL has no host.
    pub fn for_url(url: &str, timeout: Duration) -> Option<Self> {
        let parsed = reqwest::Url::parse(url).ok()?;
        let host = parsed.host_str()?.to_string();
        let port = parsed.port_or_known_default()?;
        Some(Self::new(host, port, timeout))
    }
}

#[async_trait]
impl Connectivity for TcpProbe {
    async fn is_online(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));
        match tokio::time::timeout(self.timeout, connect).await {
            Ok(Ok(_)) => true,
            Ok(Err(err)) => {
                tracing::debug!(host = %self.host, port = self.port, error = %err, "connectivity probe failed");
                false
            }
            Err(_) => {
                tracing::debug!(host = %self.host, port = self.port, "connectivity probe timed out");
                false
            }
        }
    }
}
