//! Cross-lesson tests and property tests.

use proptest::prelude::*;

use crate::arrays::copy_and_set;
use crate::discard::{divide_two_numbers, indices_only, sum_ignoring_index};
use crate::functions::{divide_numbers, swap_values};
use crate::scan::Scanner;

// ============================================================================
// Lesson Independence
// ============================================================================

/// Every writer-only lesson prints the same text on every run.
mod determinism_tests {
    use std::io;

    fn capture(f: fn(&mut Vec<u8>) -> io::Result<()>) -> Vec<u8> {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        buf
    }

    #[test]
    fn lessons_are_repeatable() {
        let lessons: [fn(&mut Vec<u8>) -> io::Result<()>; 8] = [
            crate::greeting::print_hello,
            crate::variables::run,
            crate::variables::exported_function,
            crate::formatting::println_use_case,
            crate::formatting::printf_use_case,
            crate::functions::run,
            crate::discard::run,
            crate::arrays::run,
        ];

        for lesson in lessons {
            let first = capture(lesson);
            let second = capture(lesson);
            assert!(!first.is_empty());
            assert_eq!(first, second);
        }
    }
}

#[test]
fn scanner_state_carries_between_styles() {
    let mut scanner = Scanner::new("a b c\n".as_bytes());
    let mut first = String::new();

    scanner.scan(&mut [&mut first]).unwrap();
    let rest = scanner.read_string(b'\n').unwrap();

    assert_eq!(first, "a");
    assert_eq!(rest, "b c\n");
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Writing through a copy never changes the source.
    #[test]
    fn array_copy_is_independent(
        source in prop::array::uniform6(any::<i64>()),
        index in 0usize..6,
        value in any::<i64>(),
    ) {
        let (after, copy) = copy_and_set(source, index, value);

        prop_assert_eq!(after, source);
        prop_assert_eq!(copy[index], value);
        for i in (0..6).filter(|i| *i != index) {
            prop_assert_eq!(copy[i], source[i]);
        }
    }

    #[test]
    fn swapping_twice_is_identity(a in ".*", b in ".*") {
        let (x, y) = swap_values(a.clone(), b.clone());
        prop_assert_eq!(swap_values(x, y), (a, b));
    }

    /// quotient * divisor + remainder rebuilds the dividend.
    #[test]
    fn named_results_rebuild_dividend(
        a in -1_000_000i64..1_000_000,
        b in (1i64..1000).prop_union(-1000i64..-1),
    ) {
        let (q, r) = divide_numbers(a, b);
        prop_assert_eq!(q * b + r, a);
        prop_assert!(r.abs() < b.abs());
    }

    #[test]
    fn division_by_zero_always_faults(a in any::<f64>()) {
        prop_assert!(divide_two_numbers(a, 0.0).is_err());
        prop_assert_eq!(divide_two_numbers(a, 0.0).unwrap_or_default(), 0.0);
    }

    #[test]
    fn discarding_index_matches_plain_sum(numbers in prop::collection::vec(-1000i64..1000, 0..50)) {
        prop_assert_eq!(sum_ignoring_index(&numbers), numbers.iter().sum::<i64>());
        prop_assert_eq!(indices_only(&numbers), (0..numbers.len()).collect::<Vec<_>>());
    }
}
