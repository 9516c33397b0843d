//! The utilities module's hello line.

use std::io::{self, Write};

pub fn print_hello(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Hello from the utils module!")
}
