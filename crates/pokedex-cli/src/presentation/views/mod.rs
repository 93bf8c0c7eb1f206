//! Plain-text layout for each view model.

mod catalog;
mod entity;
mod preferences;

use crate::presentation::view_models::ViewOptions;
use owo_colors::OwoColorize;

fn bold(text: &str, options: ViewOptions) -> String {
    if options.color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn accent(text: &str, options: ViewOptions) -> String {
    if options.color {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

fn dim(text: &str, options: ViewOptions) -> String {
    if options.color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

fn favorite_mark(is_favorite: bool, options: ViewOptions) -> String {
    match (is_favorite, options.color) {
        (true, true) => "★".yellow().to_string(),
        (true, false) => "★".to_string(),
        (false, _) => " ".to_string(),
    }
}
