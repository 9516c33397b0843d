//! # Discarding values with `_`
//!
//! A `_` pattern accepts a value without binding it. It is how a caller
//! drops one half of a tuple, skips the index of an `enumerate()` loop, or
//! ignores a fallible result entirely.
//!
//! Ignoring a [`Result`] is allowed but lossy: [`divide_two_numbers`] with a
//! zero divisor hands back an error, and a caller that throws the error away
//! with `unwrap_or_default()` is left holding `0.0`.

use std::io::{self, Write};

use crate::error::DivideError;

pub fn divide_two_numbers(a: f64, b: f64) -> Result<f64, DivideError> {
    if b == 0.0 {
        return Err(DivideError::DivisionByZero);
    }

    Ok(a / b)
}

/// Sums the values; the index half of each `(index, value)` pair is dropped.
#[allow(clippy::unused_enumerate_index)]
pub fn sum_ignoring_index(numbers: &[i64]) -> i64 {
    let mut sum = 0;
    for (_, value) in numbers.iter().enumerate() {
        sum += value;
    }
    sum
}

/// Collects only the positions; the values are dropped.
pub fn indices_only<T>(items: &[T]) -> Vec<usize> {
    items.iter().enumerate().map(|(index, _)| index).collect()
}

fn ignore_index_in_loop(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "----- Ignoring Index in Loop Demo -----")?;
    let numbers = [10, 20, 30, 40, 50];
    let sum = sum_ignoring_index(&numbers);
    writeln!(out, "Sum of numbers is: {sum}")
}

pub fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "----- Underscore Identifier Demo -----")?;

    let a = divide_two_numbers(10.0, 2.0).unwrap_or_default();
    writeln!(out, "Result of division is: {a}")?;

    // The error is discarded; the caller sees the zero value.
    let b = divide_two_numbers(10.0, 0.0).unwrap_or_default();
    writeln!(out, "Result of division is: {b}")?;

    match divide_two_numbers(10.0, 0.0) {
        Ok(c) => writeln!(out, "Result of division is: {c}")?,
        Err(err) => {
            tracing::debug!(%err, "division fault inspected");
            writeln!(out, "Error occurred: {err}")?;
        }
    }

    ignore_index_in_loop(out)
}
