mod catalog;
mod entity;
mod preferences;

pub use catalog::{present_catalog_page, present_scroll, present_type_list, summarize};
pub use entity::present_entity_detail;
pub use preferences::{present_favorite_toggle, present_favorites, present_guide, present_theme};
