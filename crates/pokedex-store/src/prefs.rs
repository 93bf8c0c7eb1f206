use crate::KeyValueStore;
use crate::error::Result;
use pokedex_types::{EntityId, FavoriteSet, Theme};

/// Key holding the JSON array of favorite ids.
pub const FAVORITES_KEY: &str = "pokeFavorites";

/// Key holding the theme token (`dark` or `light`).
pub const THEME_KEY: &str = "pokeTheme";

/// Typed access to the two persisted preferences.
///
/// Absent keys load as defaults (empty favorites, dark theme). A value that
/// cannot be interpreted is treated the same way and logged; only storage
/// failures are returned as errors.
pub trait PreferenceStore {
    fn load_favorites(&self) -> Result<FavoriteSet>;
    fn save_favorites(&self, favorites: &FavoriteSet) -> Result<()>;
    fn load_theme(&self) -> Result<Theme>;
    fn save_theme(&self, theme: Theme) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> PreferenceStore for S {
    fn load_favorites(&self) -> Result<FavoriteSet> {
        let Some(raw) = self.get(FAVORITES_KEY)? else {
            return Ok(FavoriteSet::default());
        };

        match serde_json::from_str::<Vec<u32>>(&raw) {
            Ok(ids) => Ok(ids.into_iter().filter_map(EntityId::new).collect()),
            Err(err) => {
                tracing::warn!(key = FAVORITES_KEY, error = %err, "ignoring unreadable favorites");
                Ok(FavoriteSet::default())
            }
        }
    }

    fn save_favorites(&self, favorites: &FavoriteSet) -> Result<()> {
        let encoded = serde_json::to_string(favorites)?;
        self.set(FAVORITES_KEY, &encoded)
    }

    fn load_theme(&self) -> Result<Theme> {
        let Some(raw) = self.get(THEME_KEY)? else {
            return Ok(Theme::default());
        };

        match raw.parse::<Theme>() {
            Ok(theme) => Ok(theme),
            Err(err) => {
                tracing::warn!(key = THEME_KEY, error = %err, "ignoring unknown theme");
                Ok(Theme::default())
            }
        }
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        self.set(THEME_KEY, theme.as_str())
    }
}
