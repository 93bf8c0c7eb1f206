use std::fmt;

use super::{accent, bold, dim, favorite_mark};
use crate::presentation::view_models::{CreateView, EntityDetailViewModel, ViewOptions};
use pokedex_types::{EntityId, find_type_chip, format_entity_id, humanize_label};

const BAR_WIDTH: usize = 20;

impl CreateView for EntityDetailViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(EntityDetailView {
            data: self,
            options,
        })
    }
}

struct EntityDetailView<'a> {
    data: &'a EntityDetailViewModel,
    options: ViewOptions,
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn type_label(name: &str) -> String {
    match find_type_chip(name) {
        Some(chip) => format!("{} {}", chip.glyph, name),
        None => name.to_string(),
    }
}

impl fmt::Display for EntityDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        let label = EntityId::new(data.id)
            .map(format_entity_id)
            .unwrap_or_default();

        writeln!(
            f,
            "{} {} {}",
            dim(&label, self.options),
            bold(&data.name, self.options),
            favorite_mark(data.is_favorite, self.options).trim_end()
        )?;
        let types: Vec<String> = data.types.iter().map(|t| type_label(t)).collect();
        writeln!(f, "  {}", accent(&types.join(" · "), self.options))?;
        writeln!(
            f,
            "  Height {:.1} m   Weight {:.1} kg",
            data.height_m, data.weight_kg
        )?;
        writeln!(f)?;

        for stat in &data.stats {
            writeln!(
                f,
                "  {:<16} {:>3} {}",
                humanize_label(&stat.name),
                stat.base_value,
                dim(&bar(stat.percent), self.options)
            )?;
        }
        writeln!(f)?;

        let abilities: Vec<String> = data.abilities.iter().map(|a| humanize_label(a)).collect();
        writeln!(f, "  Abilities: {}", abilities.join(", "))?;
        writeln!(f, "  {}", dim(&data.sprite_url, self.options))
    }
}
