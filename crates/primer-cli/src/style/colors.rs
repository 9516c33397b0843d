//! Semantic color palette for terminal output.

use owo_colors::{OwoColorize, Style};

/// Returns the style for section banners (cyan bold).
pub fn banner_style() -> Style {
    Style::new().cyan().bold()
}

/// Returns the style for headers (bold).
pub fn header_style() -> Style {
    Style::new().bold()
}

/// Trait extension to apply semantic styles.
pub trait SemanticStyle: Sized {
    /// Apply banner styling (cyan bold).
    fn banner(&self) -> String;
    /// Apply header styling (bold).
    fn header(&self) -> String;
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn banner(&self) -> String {
        if super::no_color() {
            self.to_string()
        } else {
            self.style(banner_style()).to_string()
        }
    }

    fn header(&self) -> String {
        if super::no_color() {
            self.to_string()
        } else {
            self.style(header_style()).to_string()
        }
    }
}
