//! Section banners printed between lessons.

use std::io::{self, Write};

use super::colors::SemanticStyle;

/// The banner text for one section, before styling.
pub fn section_title(title: &str) -> String {
    format!("----- {title} -----")
}

/// Prints the opening line of the walkthrough.
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Hello From Vaibhav!".header())
}

/// Prints a section banner on its own line.
pub fn print_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    tracing::debug!(section = title, "starting section");
    writeln!(out, "{}", section_title(title).banner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_title_is_dashed() {
        assert_eq!(section_title("Arrays Demo"), "----- Arrays Demo -----");
    }

    #[test]
    fn plain_section_when_colors_disabled() {
        crate::style::set_no_color(true);

        let mut buf = Vec::new();
        print_section(&mut buf, "Functions Demo").unwrap();

        assert_eq!(buf, b"----- Functions Demo -----\n");
    }
}
