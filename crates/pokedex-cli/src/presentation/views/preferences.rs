use std::fmt;

use super::{accent, bold};
use crate::presentation::view_models::{
    CreateView, FavoriteToggleViewModel, FavoritesViewModel, GuideViewModel, ThemeViewModel,
    ViewOptions,
};
use pokedex_types::{EntityId, format_entity_id};

impl CreateView for FavoriteToggleViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(FavoriteToggleView { data: self })
    }
}

struct FavoriteToggleView<'a> {
    data: &'a FavoriteToggleViewModel,
}

impl fmt::Display for FavoriteToggleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} favorites", self.data.favorites_count)
    }
}

impl CreateView for FavoritesViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(FavoritesView {
            data: self,
            options,
        })
    }
}

struct FavoritesView<'a> {
    data: &'a FavoritesViewModel,
    options: ViewOptions,
}

impl fmt::Display for FavoritesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.ids.is_empty() {
            return writeln!(f, "No favorites yet.");
        }

        writeln!(f, "{} favorites", bold(&self.data.count.to_string(), self.options))?;
        for id in self.data.ids.iter().filter_map(|id| EntityId::new(*id)) {
            writeln!(f, "  ★ {}", format_entity_id(id))?;
        }
        Ok(())
    }
}

impl CreateView for ThemeViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ThemeView {
            data: self,
            options,
        })
    }
}

struct ThemeView<'a> {
    data: &'a ThemeViewModel,
    options: ViewOptions,
}

impl fmt::Display for ThemeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let theme = bold(self.data.theme.as_str(), self.options);
        if self.data.changed {
            writeln!(f, "Theme switched to {}", theme)
        } else {
            writeln!(f, "Theme: {}", theme)
        }
    }
}

impl CreateView for GuideViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuideView {
            data: self,
            options,
        })
    }
}

struct GuideView<'a> {
    data: &'a GuideViewModel,
    options: ViewOptions,
}

impl fmt::Display for GuideView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", bold("pokedex - browse the creature catalog", self.options))?;
        writeln!(f)?;
        writeln!(
            f,
            "{} favorites · {} theme",
            self.data.favorites_count,
            accent(self.data.theme.as_str(), self.options)
        )
    }
}
