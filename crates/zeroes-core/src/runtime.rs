//! Runtime-optimized mover.
//!
//! Non-zeros are pulled toward the tail of a zero-initialized scratch buffer
//! while scanning the input backwards; the zeros the buffer started with end
//! up as the leading run. The buffer is then copied over the input and
//! dropped. Two linear passes, O(n) extra space, and the non-zero order is
//! preserved.

use crate::mover::{ensure_non_empty, Element, ZeroMover};
use crate::InvalidInput;

/// Scratch-buffer mover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOptimized;

impl ZeroMover for RuntimeOptimized {
    fn name(&self) -> &'static str {
        "RuntimeOptimized"
    }

    fn move_zeroes(&self, array: &mut [Element]) -> Result<(), InvalidInput> {
        ensure_non_empty(array)?;

        // Allocated only after validation; dropped on return.
        let mut scratch: Vec<Element> = vec![0; array.len()];
        let mut write = scratch.len();
        for &v in array.iter().rev() {
            if v != 0 {
                write -= 1;
                scratch[write] = v;
            }
        }
        array.copy_from_slice(&scratch);
        Ok(())
    }
}
