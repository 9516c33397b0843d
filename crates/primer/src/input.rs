//! # Reading user input
//!
//! Three token readers and one line reader, called one after another on the
//! same [`Scanner`] so that leftovers from one prompt flow into the next.
//!
//! The results of every read are thrown away with `let _ =`. That is the
//! lesson's pitfall: when the input does not fit, the targets silently keep
//! their zero values and the program carries on.

use std::io::{self, BufRead, Write};

use crate::error::ScanError;
use crate::scan::Scanner;

fn log_scan_error(err: &ScanError) {
    tracing::debug!(%err, "read failed, targets keep their zero values");
}

pub fn run<R: BufRead>(out: &mut impl Write, scanner: &mut Scanner<R>) -> io::Result<()> {
    writeln!(out, "-----Taking user input using Scan-----")?;

    writeln!(out, "Enter your name:")?;
    out.flush()?;
    let (mut first_name, mut last_name) = (String::new(), String::new());
    let _ = scanner
        .scan(&mut [&mut first_name, &mut last_name])
        .inspect_err(log_scan_error);
    writeln!(out, "Hello, {first_name} {last_name}!")?;

    writeln!(out, "-----Taking user input using Scanln-----")?;
    writeln!(out, "Enter your full name:")?;
    out.flush()?;
    let mut full_name = String::new();
    let _ = scanner
        .scan_line(&mut [&mut full_name])
        .inspect_err(log_scan_error);
    writeln!(out, "Hello, {full_name}!")?;

    writeln!(out, "-----Taking user input using Scanf-----")?;
    writeln!(out, "Enter your age and city (e.g., 25 NewYork):")?;
    out.flush()?;
    let (mut age, mut city) = (0_i64, String::new());
    let _ = scanner
        .scan_fmt("%d %s", &mut [&mut age, &mut city])
        .inspect_err(log_scan_error);
    writeln!(out, "You are {age} years old and live in {city}.")
}

/// Reads a whole line, spaces included. The echoed text carries its own
/// newline.
pub fn run_buffered<R: BufRead>(
    out: &mut impl Write,
    scanner: &mut Scanner<R>,
) -> io::Result<()> {
    writeln!(out, "-----Taking user input using bufio-----")?;
    writeln!(out, "Enter your full name:")?;
    out.flush()?;

    let name = scanner
        .read_string(b'\n')
        .inspect_err(log_scan_error)
        .unwrap_or_default();
    write!(out, "Hello, {name}")?;
    if !name.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> Vec<String> {
        let mut scanner = Scanner::new(input.as_bytes());
        let mut buf = Vec::new();
        run(&mut buf, &mut scanner).unwrap();
        run_buffered(&mut buf, &mut scanner).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn well_formed_answers() {
        let lines = session("John Doe\nJohn\n25 NewYork\nJohn Ronald Reuel Tolkien\n");

        assert!(lines.contains(&"Hello, John Doe!".to_string()));
        assert!(lines.contains(&"Hello, John!".to_string()));
        assert!(lines.contains(&"You are 25 years old and live in NewYork.".to_string()));
        assert_eq!(lines.last().unwrap(), "Hello, John Ronald Reuel Tolkien");
    }

    #[test]
    fn leftover_input_shifts_later_answers() {
        // "Smith" is left over from the single-token read and is then
        // rejected by the numeric verb.
        let lines = session("John Doe\nJohn Smith\n25 NewYork\n");

        assert!(lines.contains(&"Hello, John!".to_string()));
        assert!(lines.contains(&"You are 0 years old and live in .".to_string()));
        assert_eq!(lines.last().unwrap(), "Hello, 25 NewYork");
    }

    #[test]
    fn empty_input_keeps_zero_values() {
        let lines = session("");

        assert!(lines.contains(&"Hello,  !".to_string()));
        assert!(lines.contains(&"Hello, !".to_string()));
        assert!(lines.contains(&"You are 0 years old and live in .".to_string()));
        assert_eq!(lines.last().unwrap(), "Hello, ");
    }
}
