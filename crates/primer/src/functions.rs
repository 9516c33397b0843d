//! # Functions
//!
//! From no parameters and no result up to several named results. Each
//! shape is a pure function; [`run`] calls them and prints what they return
//! using space-joined operands (`After Swapping: x = World , y = Hello`).

use std::io::{self, Write};

/// No parameters; the operands are fixed in the body.
pub fn add_two_numbers() -> i64 {
    5 + 10
}

/// Parameters, one result.
pub fn add_numbers(a: i64, b: i64) -> i64 {
    a + b
}

pub fn multiply_numbers(a: i64, b: i64) -> i64 {
    a * b
}

/// Same signature as [`multiply_numbers`]; consecutive parameters of one
/// type are the shorthand being demonstrated in the lesson text.
pub fn better_multiply_numbers(a: i64, b: i64) -> i64 {
    a * b
}

/// Two results, returned positionally.
pub fn swap_values<T>(a: T, b: T) -> (T, T) {
    (b, a)
}

/// Two named results. Both are assigned in the body and the tuple of the
/// last assigned values is what comes back.
///
/// Panics when `b` is zero.
pub fn divide_numbers(a: i64, b: i64) -> (i64, i64) {
    let quotient = a / b;
    let remainder = a % b;
    (quotient, remainder)
}

pub fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "----- Function Demo -----")?;

    writeln!(out, "Sum is: {}", add_two_numbers())?;
    writeln!(out, "Result is: {}", add_numbers(20, 30))?;

    let result = multiply_numbers(5, 6);
    writeln!(out, "Multiplication Result is: {result}")?;

    let better_result = better_multiply_numbers(7, 8);
    writeln!(out, "Better Multiplication Result is: {better_result}")?;

    let (x, y) = swap_values("Hello", "World");
    writeln!(out, "After Swapping: x = {x} , y = {y}")?;

    let (q, r) = divide_numbers(17, 5);
    writeln!(out, "Quotient: {q} , Remainder: {r}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_reverses_operands() {
        assert_eq!(swap_values("Hello", "World"), ("World", "Hello"));
    }

    #[test]
    fn named_results() {
        assert_eq!(divide_numbers(17, 5), (3, 2));
    }

    #[test]
    fn remainder_takes_sign_of_dividend() {
        assert_eq!(divide_numbers(-17, 5), (-3, -2));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn named_results_panic_on_zero_divisor() {
        let _ = divide_numbers(1, 0);
    }

    #[test]
    fn lesson_output() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            [
                "----- Function Demo -----",
                "Sum is: 15",
                "Result is: 50",
                "Multiplication Result is: 30",
                "Better Multiplication Result is: 56",
                "After Swapping: x = World , y = Hello",
                "Quotient: 3 , Remainder: 2",
            ]
        );
    }
}
