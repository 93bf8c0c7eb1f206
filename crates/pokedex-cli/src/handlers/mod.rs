pub mod browse;
pub mod favorite;
pub mod favorites;
pub mod guide;
pub mod list;
pub mod random;
pub mod show;
pub mod theme;
pub mod types;

use anyhow::{Result, bail};
use pokedex_runtime::{FetchStatus, Session};
use pokedex_store::PreferenceStore;

/// Type names are matched in lowercase, however they were typed.
pub(crate) fn type_filter(arg: &str) -> String {
    arg.trim().to_lowercase()
}

/// Run a fetch cycle; a failed cycle becomes the command's error.
pub(crate) async fn load_catalog<P: PreferenceStore>(session: &mut Session<P>) -> Result<()> {
    if session.refresh().await == FetchStatus::Error {
        let message = session
            .controller()
            .catalog()
            .error_message()
            .unwrap_or("Failed to fetch Pokemon list")
            .to_string();
        bail!(message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_folds_case() {
        assert_eq!(type_filter("Fire"), "fire");
        assert_eq!(type_filter(" WATER "), "water");
        assert_eq!(type_filter("all"), "all");
    }
}
