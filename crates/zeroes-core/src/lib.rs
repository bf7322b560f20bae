//! zeroes-core: move every zero-valued element of an `i32` slice to the front.
//!
//! Two movers implement the same [`ZeroMover`] contract:
//! - [`RuntimeOptimized`]: one backward scan into a zero-initialized scratch
//!   buffer, then a bulk copy back (O(n) time, O(n) extra space), and
//! - [`SpaceOptimized`]: two cursors rearranging in place (O(n) time, O(1)
//!   extra space).
//!
//! The relative order of non-zero elements is **not** part of the contract.
//! After a successful call every zero sits in `[0, z)` and every non-zero in
//! `[z, len)`, where `z` is the number of zeros.
//!
//! ```rust
//! use zeroes_core::prelude::*;
//!
//! let mut a = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];
//! SpaceOptimized.move_zeroes(&mut a)?;
//! assert_eq!(a, [0, 0, 3, 4, 5, 6, 7, 8, 2, 1]);
//!
//! let mut b = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];
//! Strategy::RuntimeOptimized.mover().move_zeroes(&mut b)?;
//! assert_eq!(b, [0, 0, 1, 2, 3, 4, 5, 6, 7, 8]);
//! # Ok::<(), zeroes_core::InvalidInput>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// Error types shared by both movers and the strategy table.
pub mod error;
/// Seeded array generator for tests, the CLI, and benches.
pub mod generator;
/// Zero-prefix and permutation checks.
pub mod invariants;
/// The `ZeroMover` trait, the pair-style entry point, and the strategy table.
pub mod mover;
/// Scratch-buffer mover.
pub mod runtime;
/// In-place two-cursor mover.
pub mod space;
/// Named scenarios run against every strategy.
pub mod verify;

pub use error::*;
pub use invariants::{check_moved, InvariantViolation};
pub use mover::*;
pub use runtime::RuntimeOptimized;
pub use space::{CursorSteps, SpaceOptimized};

/// Commonly-used items for quick imports.
///
/// ```rust
/// use zeroes_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        error::InvalidInput,
        mover::{move_zeroes_pair, Element, Strategy, ZeroMover},
        runtime::RuntimeOptimized,
        space::SpaceOptimized,
    };
}
