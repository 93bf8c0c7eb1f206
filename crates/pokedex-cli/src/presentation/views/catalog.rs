use std::fmt;

use super::{accent, bold, dim, favorite_mark};
use crate::presentation::view_models::{
    CatalogPageViewModel, CreateView, ScrollViewModel, TypeListViewModel, ViewOptions,
};
use pokedex_runtime::FetchStatus;
use pokedex_types::{ALL_TYPES, EntityId, format_entity_id};

impl CreateView for CatalogPageViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogPageView {
            data: self,
            options,
        })
    }
}

struct CatalogPageView<'a> {
    data: &'a CatalogPageViewModel,
    options: ViewOptions,
}

impl CatalogPageView<'_> {
    fn render_filters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.data.search_term.is_empty() {
            parts.push(format!("search \"{}\"", self.data.search_term));
        }
        if self.data.selected_type != ALL_TYPES {
            parts.push(format!("type {}", self.data.selected_type));
        }
        parts.push(format!("sorted by {}", self.data.sort_key));

        writeln!(
            f,
            "{} Pokémon  {}",
            bold(&self.data.filtered_count.to_string(), self.options),
            dim(&parts.join(", "), self.options)
        )
    }
}

impl fmt::Display for CatalogPageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.status == FetchStatus::Loading {
            return writeln!(f, "Loading…");
        }

        self.render_filters(f)?;
        writeln!(f)?;

        for entry in &self.data.entries {
            let label = EntityId::new(entry.id)
                .map(format_entity_id)
                .unwrap_or_default();
            writeln!(
                f,
                "{} {:<6} {:<14} {:<18} HP {:>3}  ATK {:>3}",
                favorite_mark(entry.is_favorite, self.options),
                dim(&label, self.options),
                bold(&entry.name, self.options),
                accent(&entry.types.join("/"), self.options),
                entry.hp,
                entry.attack
            )?;
        }

        if !self.data.entries.is_empty() {
            writeln!(f)?;
        }
        writeln!(
            f,
            "{}",
            dim(
                &format!(
                    "showing {} of {} · {} favorites",
                    self.data.entries.len(),
                    self.data.filtered_count,
                    self.data.favorites_count
                ),
                self.options
            )
        )
    }
}

impl CreateView for TypeListViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(TypeListView {
            data: self,
            options,
        })
    }
}

struct TypeListView<'a> {
    data: &'a TypeListViewModel,
    options: ViewOptions,
}

impl fmt::Display for TypeListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chip in &self.data.types {
            let marker = if chip.selected { ">" } else { " " };
            let name = if chip.selected {
                bold(&chip.name, self.options)
            } else {
                chip.name.clone()
            };
            writeln!(f, "{} {} {}", marker, chip.glyph, name)?;
        }
        Ok(())
    }
}

impl CreateView for ScrollViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ScrollView {
            data: self,
            options,
        })
    }
}

struct ScrollView<'a> {
    data: &'a ScrollViewModel,
    options: ViewOptions,
}

impl fmt::Display for ScrollView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scroll offset {:.0}", self.data.scroll_y)?;
        if self.data.past_threshold {
            write!(f, "  {}", accent("↑ top", self.options))?;
        }
        writeln!(f)
    }
}
