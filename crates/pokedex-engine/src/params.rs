use pokedex_types::{ALL_TYPES, SortKey};
use serde::{Deserialize, Serialize};

/// Initial cumulative page size.
pub const PAGE_SIZE_START: usize = 20;

/// Growth of the page size per `load_more`.
pub const PAGE_SIZE_INCREMENT: usize = 20;

/// Inputs of the derivation pipeline other than the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewParameters {
    /// Matched verbatim, case-insensitively
    pub search_term: String,
    /// `"all"` or a type name
    pub selected_type: String,
    pub sort_key: SortKey,
    /// Cumulative cap on displayed entities
    pub page_size: usize,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_type: ALL_TYPES.to_string(),
            sort_key: SortKey::default(),
            page_size: PAGE_SIZE_START,
        }
    }
}

impl ViewParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn of_type(mut self, type_name: impl Into<String>) -> Self {
        self.selected_type = type_name.into();
        self
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    pub fn load_more(&mut self) {
        self.page_size = self.page_size.saturating_add(PAGE_SIZE_INCREMENT);
    }

    pub fn reset_page_size(&mut self) {
        self.page_size = PAGE_SIZE_START;
    }
}
