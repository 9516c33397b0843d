//! # Variables and constants
//!
//! `static` bindings are initialised once and may be read from anywhere in
//! the crate; `const` bindings are inlined at every use. Both are declared
//! with an explicit type at module level, the same way `let` bindings with
//! an inferred type can only appear inside a function body.
//!
//! Grouped declarations print in the order they were declared.

use std::io::{self, Write};

// Explicitly typed.
static NAME: &str = "Vaibhav";
static AGE: i64 = 25;
static IS_DEVELOPER: bool = true;

const COUNTRY: &str = "India";
const STATE: &str = "Haryana";
const SALARY: f64 = 75000.50;

// Grouped.
static CITY: &str = "Gurgaon";
static COUNTRY_CODE: i64 = 91;

#[allow(clippy::approx_constant)]
const PI: f64 = 3.14;
const LANGUAGE: &str = "Go";

/// Prints every module-level binding followed by one function-local one.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Name: {NAME}")?;
    writeln!(out, "Age: {AGE}")?;
    writeln!(out, "Is Developer: {IS_DEVELOPER}")?;
    writeln!(out, "Country: {COUNTRY}")?;
    writeln!(out, "State: {STATE}")?;
    writeln!(out, "Salary: {SALARY}")?;
    writeln!(out, "City: {CITY}")?;
    writeln!(out, "Country Code: {COUNTRY_CODE}")?;
    writeln!(out, "Pi: {PI}")?;
    writeln!(out, "Language: {LANGUAGE}")?;

    // Type inferred from the literal; only possible inside a function.
    let take = 19;
    writeln!(out, "Take: {take}")
}

/// A `pub` item is visible outside this module.
pub fn exported_function(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "This is an exported function.")
}
