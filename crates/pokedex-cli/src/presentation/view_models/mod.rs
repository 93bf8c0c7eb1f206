pub mod catalog;
pub mod common;
pub mod entity;
pub mod preferences;
pub mod result;

pub use catalog::{
    CatalogPageViewModel, EntitySummaryViewModel, ScrollViewModel, TypeChipViewModel,
    TypeListViewModel,
};
pub use common::{Guidance, StatusBadge, StatusLevel, ViewOptions};
pub use entity::{EntityDetailViewModel, StatViewModel};
pub use preferences::{FavoriteToggleViewModel, FavoritesViewModel, GuideViewModel, ThemeViewModel};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridges a view model to the `Display` type that lays it out as text.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a>;
}
