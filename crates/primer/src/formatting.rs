//! # Plain vs. formatted output
//!
//! The plain style separates its operands with a space and always ends the
//! line. The formatted style follows a template: precision, separators and
//! the trailing newline are all spelled out by the caller, so forgetting the
//! `\n` leaves the cursor on the same line.
//!
//! A character constant is stored as its code point. Printed through the
//! plain style it shows the number (`86`); the `%c` template shows the glyph.

use std::io::{self, Write};

const NAME: &str = "Vaibhav";
const AGE: i64 = 25;
const SALARY: f64 = 50000.50;
const START_CHAR: char = 'V';

/// Code point of a character, as the plain style prints it.
pub fn code_point(c: char) -> u32 {
    u32::from(c)
}

pub fn println_use_case(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "----------------------Println Use Case----------------------"
    )?;

    let start_char = code_point(START_CHAR);
    writeln!(out, "Name: {NAME}")?;
    writeln!(out, "Age: {AGE}")?;
    writeln!(out, "Salary: {SALARY}")?;
    writeln!(out, "Start Character: {start_char}")?;

    writeln!(out, "----------------------")?;

    writeln!(out, "{NAME} {AGE} {SALARY} {start_char}")
}

#[allow(clippy::write_with_newline)]
pub fn printf_use_case(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "----------------------Printf Use Case----------------------"
    )?;

    write!(out, "Name: {NAME}\n")?;
    write!(out, "Age: {AGE}\n")?;
    write!(out, "Salary : {SALARY:.3}\n")?;
    write!(out, "Start Character: {START_CHAR}\n")?;

    write!(out, "----------------------\n")?;

    write!(out, "Combined Output without spaces:\n")?;
    write!(out, "{NAME}{AGE}{SALARY:.2}{START_CHAR}\n")?;
    write!(out, "Combined Output with spaces:\n")?;
    // No newline: the next writer continues on this line.
    write!(out, "{NAME} {AGE} {SALARY:.2} {START_CHAR}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_style_prints_char_as_code_point() {
        let text = capture(|out| println_use_case(out));
        assert!(text.contains("Start Character: 86\n"));
        assert!(text.ends_with("Vaibhav 25 50000.5 86\n"));
    }

    #[test]
    fn formatted_style_honours_precision() {
        let text = capture(|out| printf_use_case(out));
        assert!(text.contains("Salary : 50000.500\n"));
        assert!(text.contains("Start Character: V\n"));
        assert!(text.contains("Vaibhav2550000.50V\n"));
    }

    #[test]
    fn formatted_style_has_no_trailing_newline() {
        let text = capture(|out| printf_use_case(out));
        assert!(text.ends_with("Vaibhav 25 50000.50 V"));
    }

    #[test]
    fn code_point_of_ascii_letter() {
        assert_eq!(code_point('V'), 86);
    }
}
