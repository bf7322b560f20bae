//! Mover abstraction and strategy table.
//!
//! Movers are zero-sized and stateless; callers either name one directly
//! (`SpaceOptimized.move_zeroes(..)`) or pick one at runtime through
//! [`Strategy`].
//!
//! ## Contract implementors uphold
//! - Reject an empty slice with [`InvalidInput::Empty`] before touching it.
//! - On success the slice is a permutation of its input with all zeros in a
//!   leading run; non-zero order is unspecified.
//! - Never allocate anything the caller ends up owning, and never panic.

use crate::{InvalidInput, RuntimeOptimized, SpaceOptimized, UnknownStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Element type of the arrays being rearranged.
pub type Element = i32;

/// Moves every zero of a slice to its front, in place.
pub trait ZeroMover: Send + Sync {
    /// Stable display name, e.g. `"RuntimeOptimized"`.
    fn name(&self) -> &'static str;

    /// Rearrange `array` so that all zeros precede all non-zeros.
    ///
    /// # Errors
    /// Returns [`InvalidInput::Empty`] if `array` has no elements.
    fn move_zeroes(&self, array: &mut [Element]) -> Result<(), InvalidInput>;
}

/// Shared validation for the slice entry point.
#[inline]
pub(crate) const fn ensure_non_empty(array: &[Element]) -> Result<(), InvalidInput> {
    if array.is_empty() {
        Err(InvalidInput::Empty)
    } else {
        Ok(())
    }
}

/// Reference-plus-count entry point.
///
/// Checks run in this order and stop at the first failure:
/// 1. `size == 0` ⇒ [`InvalidInput::Empty`] (the array is never looked at),
/// 2. `array` is `None` ⇒ [`InvalidInput::Absent`],
/// 3. `size != array.len()` ⇒ [`InvalidInput::SizeMismatch`].
///
/// ```rust
/// use zeroes_core::prelude::*;
///
/// assert_eq!(move_zeroes_pair(&SpaceOptimized, None, 1), Err(InvalidInput::Absent));
/// let mut a = [0, 3, 0];
/// move_zeroes_pair(&SpaceOptimized, Some(&mut a), 3)?;
/// assert_eq!(a, [0, 0, 3]);
/// # Ok::<(), InvalidInput>(())
/// ```
pub fn move_zeroes_pair<M>(
    mover: &M,
    array: Option<&mut [Element]>,
    size: usize,
) -> Result<(), InvalidInput>
where
    M: ZeroMover + ?Sized,
{
    if size == 0 {
        return Err(InvalidInput::Empty);
    }
    let array = array.ok_or(InvalidInput::Absent)?;
    if array.len() != size {
        return Err(InvalidInput::SizeMismatch {
            size,
            len: array.len(),
        });
    }
    mover.move_zeroes(array)
}

/// Named mover implementations, in harness order.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Scratch buffer filled back-to-front, then copied back.
    RuntimeOptimized,
    /// Two cursors, no auxiliary storage.
    SpaceOptimized,
}

impl Strategy {
    /// Every strategy, in the order the self-tests run them.
    pub const ALL: [Self; 2] = [Self::RuntimeOptimized, Self::SpaceOptimized];

    /// The mover behind this strategy.
    #[must_use]
    pub fn mover(self) -> &'static dyn ZeroMover {
        match self {
            Self::RuntimeOptimized => &RuntimeOptimized,
            Self::SpaceOptimized => &SpaceOptimized,
        }
    }

    /// Display name (same as [`ZeroMover::name`]).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.mover().name()
    }

    /// Kebab-case name used on the command line, in profiles, and by serde.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::RuntimeOptimized => "runtime-optimized",
            Self::SpaceOptimized => "space-optimized",
        }
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.slug() == s)
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_entry_checks_size_before_presence() {
        // Both absent and zero-sized: the size check wins.
        assert_eq!(
            move_zeroes_pair(&RuntimeOptimized, None, 0),
            Err(InvalidInput::Empty)
        );
        assert_eq!(
            move_zeroes_pair(&RuntimeOptimized, None, 1),
            Err(InvalidInput::Absent)
        );
    }

    #[test]
    fn pair_entry_rejects_mismatched_size_without_mutation() {
        let mut a = [5, 0, 7, 0];
        let r = move_zeroes_pair(&SpaceOptimized, Some(&mut a), 3);
        assert_eq!(r, Err(InvalidInput::SizeMismatch { size: 3, len: 4 }));
        assert_eq!(a, [5, 0, 7, 0]);
    }

    #[test]
    fn strategy_table_matches_mover_names() {
        let names: Vec<_> = Strategy::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["RuntimeOptimized", "SpaceOptimized"]);
    }

    #[test]
    fn strategy_serde_names_are_kebab_case() {
        let json = serde_json::to_string(&Strategy::SpaceOptimized).unwrap();
        assert_eq!(json, "\"space-optimized\"");
        let back: Strategy = serde_json::from_str("\"runtime-optimized\"").unwrap();
        assert_eq!(back, Strategy::RuntimeOptimized);
    }

    #[test]
    fn strategy_slugs_parse_back() {
        for s in Strategy::ALL {
            assert_eq!(s.slug().parse::<Strategy>(), Ok(s));
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.slug()));
        }
        assert_eq!(
            "SpaceOptimized".parse::<Strategy>(),
            Err(UnknownStrategy("SpaceOptimized".into()))
        );
        assert!("".parse::<Strategy>().is_err());
    }
}
