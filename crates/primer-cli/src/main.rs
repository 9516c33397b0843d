//! Primer walkthrough.
//!
//! Runs every lesson once, in a fixed order, with a banner before each.
//! The input lesson reads its answers from stdin.
//!
//! # Quick Start
//!
//! ```bash
//! # Interactive
//! primer
//!
//! # Scripted answers
//! printf 'John Doe\nJohn\n25 NewYork\nJohn Ronald Reuel Tolkien\n' | primer
//!
//! # Plain output with scanner tracing on stderr
//! NO_COLOR=1 RUST_LOG=primer=debug primer
//! ```

mod style;

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use primer::{Scanner, arrays, discard, formatting, functions, greeting, input, variables};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    style::set_no_color(std::env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut scanner = Scanner::new(io::stdin().lock());

    walkthrough(&mut out, &mut scanner).context("failed to write lesson output")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

/// The fixed lesson sequence.
fn walkthrough<R: BufRead>(out: &mut impl Write, scanner: &mut Scanner<R>) -> io::Result<()> {
    style::print_banner(out)?;
    greeting::print_hello(out)?;

    style::print_section(out, "Variables Demo")?;
    variables::run(out)?;
    variables::exported_function(out)?;

    style::print_section(out, "Difference between Println and Printf")?;
    formatting::println_use_case(out)?;
    formatting::printf_use_case(out)?;

    style::print_section(out, "User Input Demo")?;
    input::run(out, scanner)?;
    input::run_buffered(out, scanner)?;

    style::print_section(out, "Functions Demo")?;
    functions::run(out)?;

    style::print_section(out, "Blank Identifier Demo")?;
    discard::run(out)?;

    style::print_section(out, "Arrays Demo")?;
    arrays::run(out)
}
