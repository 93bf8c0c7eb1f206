// View derivation engine
// Pure functions from (catalog, view parameters) to the rendered subset.
// No I/O and no interior state apart from the memo.

pub mod derive;
pub mod filter;
pub mod memo;
pub mod params;
pub mod sort;

pub use derive::{DerivedView, derive, derive_view};
pub use filter::{filter_entities, matches_search, matches_type};
pub use memo::ViewMemo;
pub use params::{PAGE_SIZE_INCREMENT, PAGE_SIZE_START, ViewParameters};
pub use sort::{collation_key, compare_names, sort_entities};
