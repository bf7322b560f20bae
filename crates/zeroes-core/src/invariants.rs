//! Post-condition checks shared by the verifier, the CLI, and the tests.
//!
//! A mover's output is accepted iff it is
//! - a permutation of the input (same multiset of values), and
//! - zero-prefixed: every zero precedes every non-zero.

use crate::Element;
use thiserror::Error;

/// Which post-condition a moved array broke.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Input and output have different lengths.
    #[error("length changed from {before} to {after}")]
    LengthChanged {
        /// Input length.
        before: usize,
        /// Output length.
        after: usize,
    },
    /// Some value was invented, duplicated, or lost.
    #[error("output is not a permutation of the input")]
    NotPermutation,
    /// A non-zero sits before a zero.
    #[error("non-zero value at index {index} precedes a zero")]
    ZeroAfterNonZero {
        /// Index of the first non-zero that is followed by a zero.
        index: usize,
    },
}

/// Number of zero-valued elements.
#[must_use]
pub fn zero_count(a: &[Element]) -> usize {
    a.iter().filter(|&&v| v == 0).count()
}

/// Index of the first non-zero followed (anywhere later) by a zero.
fn first_misplaced(a: &[Element]) -> Option<usize> {
    let first_non_zero = a.iter().position(|&v| v != 0)?;
    a[first_non_zero..]
        .contains(&0)
        .then_some(first_non_zero)
}

/// `true` iff all zeros occupy `[0, zero_count(a))`.
#[must_use]
pub fn is_zero_prefixed(a: &[Element]) -> bool {
    first_misplaced(a).is_none()
}

/// Multiset equality of `a` and `b`.
#[must_use]
pub fn is_permutation_of(a: &[Element], b: &[Element]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut x = a.to_vec();
    let mut y = b.to_vec();
    x.sort_unstable();
    y.sort_unstable();
    x == y
}

/// Check every post-condition of a move from `before` to `after`.
///
/// ```rust
/// use zeroes_core::{check_moved, InvariantViolation};
///
/// assert!(check_moved(&[3, 0, 1], &[0, 3, 1]).is_ok());
/// assert_eq!(
///     check_moved(&[3, 0, 1], &[3, 0, 1]),
///     Err(InvariantViolation::ZeroAfterNonZero { index: 0 })
/// );
/// ```
pub fn check_moved(before: &[Element], after: &[Element]) -> Result<(), InvariantViolation> {
    if before.len() != after.len() {
        return Err(InvariantViolation::LengthChanged {
            before: before.len(),
            after: after.len(),
        });
    }
    if !is_permutation_of(before, after) {
        return Err(InvariantViolation::NotPermutation);
    }
    match first_misplaced(after) {
        Some(index) => Err(InvariantViolation::ZeroAfterNonZero { index }),
        None => Ok(()),
    }
}
