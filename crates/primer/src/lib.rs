//! # Primer: language fundamentals, one lesson per module
//!
//! Each lesson is a leaf: a `run` function that declares a few bindings and
//! writes labeled lines to the writer it is given. The `primer` binary calls
//! them in a fixed order; tests call them with a `Vec<u8>`.
//!
//! ## Lessons
//!
//! 1. [`greeting`] - Hello from a second module
//! 2. [`variables`] - `static`, `const` and `let` bindings
//! 3. [`formatting`] - Plain vs. templated output
//! 4. [`input`] - Three ways to read tokens, one way to read a line
//! 5. [`functions`] - Parameters, results and named results
//! 6. [`discard`] - Ignoring values with `_`
//! 7. [`arrays`] - Fixed-size arrays and copy semantics
//!
//! ## Quick Start
//!
//! ```bash
//! # Run all tests
//! cargo test
//!
//! # Walk through every lesson
//! cargo run
//!
//! # Trace the scanner
//! RUST_LOG=primer=trace cargo run
//! ```

pub mod arrays;
pub mod discard;
pub mod error;
pub mod formatting;
pub mod functions;
pub mod greeting;
pub mod input;
pub mod render;
pub mod scan;
pub mod variables;

pub use error::{DivideError, ScanError};
pub use scan::{Scannable, Scanner};

#[cfg(test)]
mod tests;
