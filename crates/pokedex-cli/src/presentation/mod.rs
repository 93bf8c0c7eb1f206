//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!  (drives the      (domain to         (raw data)       (format    ==(Text)==> [ View ]   --> stdout
//!   controller)      view model)                         switch)                (layout + colour)
//! ```
//!
//! View models hold raw values (ids as numbers, heights in metres as floats).
//! Formatting such as `#025` or stat bars happens only in `views/`.

pub mod presenters;
pub mod renderers;
pub mod view_models;
mod views;

pub use renderers::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
