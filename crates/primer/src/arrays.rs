//! # Fixed-size arrays
//!
//! **Key concepts:**
//! - The length is part of the type: `[i64; 5]` and `[i64; 6]` are different types
//! - Elements left unset hold the element type's default (`0`, `""`)
//! - Arrays of `Copy` elements are themselves `Copy`: assigning one array to
//!   another binding duplicates it, and mutating the duplicate never touches
//!   the source
//! - Elements live contiguously, inline in the owning binding

use std::io::{self, Write};

use crate::render::{Render, quoted};

/// Copies `source`, overwrites `copy[index]` and returns both arrays.
///
/// The returned source is always equal to the input.
pub fn copy_and_set<const N: usize>(
    source: [i64; N],
    index: usize,
    value: i64,
) -> ([i64; N], [i64; N]) {
    let mut copy = source;
    copy[index] = value;
    (source, copy)
}

pub fn run(out: &mut impl Write) -> io::Result<()> {
    // Declared with a length; every element starts at its default.
    let mut arr1 = [0_i64; 5];
    writeln!(out, "{}", arr1.render())?;

    let mut arr2: [String; 3] = Default::default();
    writeln!(out, "{}", quoted(&arr2))?;

    arr1[0] = 10;
    arr1[1] = 20;
    arr1[2] = 30;

    arr2[0] = "Hello".to_string();
    arr2[1] = "World".to_string();

    writeln!(out, "{}", arr1.render())?;
    writeln!(out, "{}", quoted(&arr2))?;

    // Declared and initialised in one line.
    let arr3: [i64; 6] = [1, 2, 3, 4, 5, 6];
    writeln!(out, "{}", arr3.render())?;

    // Length taken from the literal.
    let arr4 = ["Go", "is", "awesome"];
    writeln!(out, "{}", quoted(&arr4))?;

    // Two rows, three columns.
    let arr: [[i64; 3]; 2] = [[1, 2, 3], [4, 5, 6]];
    writeln!(out, "{}", arr.render())?;

    // Assignment copies.
    let mut arr5 = arr3;
    arr5[0] = 100;
    writeln!(out, "arr3: {}", arr3.render())?;
    writeln!(out, "arr5: {}", arr5.render())?;

    writeln!(out, "Length of arr4: {}", arr4.len())
}
