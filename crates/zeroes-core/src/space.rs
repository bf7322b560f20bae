//! Space-optimized mover.
//!
//! Two cursors close in on each other: `i` walks down from the tail and
//! `next_zero` walks up from the head. Whenever `i` lands on a zero,
//! `next_zero` skips the zeros already packed at the front and the first
//! non-zero it finds is swapped into slot `i`.
//!
//! Every outer iteration and every inner advance shrinks the gap
//! `i - next_zero` by one, so the combined cursor work is bounded by the
//! slice length. [`SpaceOptimized::move_zeroes_counted`] exposes those
//! counts so the bound can be checked on real inputs.

use crate::mover::{ensure_non_empty, Element, ZeroMover};
use crate::InvalidInput;
use serde::{Deserialize, Serialize};

/// In-place two-cursor mover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpaceOptimized;

/// Cursor work performed by one call of the space-optimized mover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSteps {
    /// Outer-loop iterations (descending cursor).
    pub outer: usize,
    /// Inner-loop advances (ascending `next_zero` cursor).
    pub inner: usize,
}

impl CursorSteps {
    /// Combined cursor work; never exceeds the slice length.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.outer + self.inner
    }
}

impl SpaceOptimized {
    /// Same as [`ZeroMover::move_zeroes`], also reporting cursor work.
    ///
    /// ```rust
    /// use zeroes_core::SpaceOptimized;
    ///
    /// let mut a = [0, 0, 5, 0];
    /// let steps = SpaceOptimized.move_zeroes_counted(&mut a)?;
    /// assert_eq!(a, [0, 0, 0, 5]);
    /// assert!(steps.total() <= a.len());
    /// # Ok::<(), zeroes_core::InvalidInput>(())
    /// ```
    pub fn move_zeroes_counted(
        &self,
        array: &mut [Element],
    ) -> Result<CursorSteps, InvalidInput> {
        ensure_non_empty(array)?;
        Ok(rearrange(array))
    }
}

impl ZeroMover for SpaceOptimized {
    fn name(&self) -> &'static str {
        "SpaceOptimized"
    }

    fn move_zeroes(&self, array: &mut [Element]) -> Result<(), InvalidInput> {
        self.move_zeroes_counted(array).map(|_| ())
    }
}

/// Core loop. `array` must be non-empty.
fn rearrange(array: &mut [Element]) -> CursorSteps {
    let mut steps = CursorSteps::default();
    let mut next_zero = 0usize;
    let mut i = array.len() - 1;

    while i > next_zero {
        steps.outer += 1;
        if array[i] == 0 {
            while next_zero < i && array[next_zero] == 0 {
                next_zero += 1;
                steps.inner += 1;
            }
            // array[i] is zero, so this leaves a zero at next_zero.
            array.swap(i, next_zero);
        }
        i -= 1;
    }
    steps
}
