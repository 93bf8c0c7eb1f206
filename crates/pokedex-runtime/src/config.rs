use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_LIMIT: usize = 151;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. POKEDEX_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.pokedex (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("POKEDEX_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("pokedex"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pokedex"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the remote catalog API; the list endpoint is `<base>/pokemon`
    pub api_base_url: String,
    /// Number of references requested from the list endpoint
    pub page_limit: usize,
    /// Whole-request timeout of the HTTP client
    pub request_timeout_secs: u64,
    /// When false the connectivity gate always reports online
    pub connectivity_probe: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connectivity_probe: true,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn database_path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("pokedex.db")
    }

    pub fn list_url(&self) -> String {
        format!(
            "{}/pokemon?limit={}",
            self.api_base_url.trim_end_matches('/'),
            self.page_limit
        )
    }

    fn validate(&self) -> Result<()> {
        if self.page_limit == 0 {
            return Err(Error::Config("page_limit must be at least 1".to_string()));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(Error::Config(format!(
                "api_base_url must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_limit, 151);
        assert_eq!(
            config.list_url(),
            "https://pokeapi.co/api/v2/pokemon?limit=151"
        );
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            api_base_url: "http://localhost:8080/api/v2/".to_string(),
            page_limit: 20,
            ..Config::default()
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.list_url(), "http://localhost:8080/api/v2/pokemon?limit=20");
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "page_limit = 50\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.page_limit, 50);
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
        assert!(loaded.connectivity_probe);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_zero_page_limit_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "page_limit = 0\n")?;

        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        let resolved = resolve_data_dir(Some("/tmp/pokedex-data"))?;
        assert_eq!(resolved, PathBuf::from("/tmp/pokedex-data"));
        Ok(())
    }
}
