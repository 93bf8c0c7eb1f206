pub mod entity;
pub mod preferences;
pub mod sort;

pub use entity::*;
pub use preferences::*;
pub use sort::*;
