//! Monotonic run grouping library.
//!
//! Given an ordered sequence, this crate finds maximal contiguous runs of
//! "monotonically adjacent" values and re-emits the sequence as a mixture of
//! inclusive range markers and loose elements. Runs at least as long as a
//! configurable threshold collapse into one [Span]; shorter runs pass through
//! element by element. For example, `[1, 2, 3, 7, 8, 20]` becomes
//! `[1..=3, 7, 8, 20]` with the default threshold of 3.
//!
//! # Element kinds
//!
//! Adjacency ("is B the immediate successor of A?") depends on the kind of
//! value being grouped:
//!
//! 1. (integer) native `i64` values compare with a checked `+ 1`; anything
//!    that would overflow the native width, and any [num::BigInt] operand,
//!    goes through arbitrary-precision comparison instead.
//! 2. (date) date values project to a day ordinal once per element and
//!    compare ordinals.
//! 3. (successor) any other kind implementing [Successor] compares against
//!    the previous element's successor by value equality.
//!
//! The dynamic entry point [group_monotonic] works on `[Value]` slices and
//! picks the strategy from the first element's kind; [group_successors] is
//! the statically-typed equivalent for any `T: Successor`.
mod error;
mod group;
mod span;
mod successor;
mod value;

pub use crate::error::{GroupError, GroupResult};
pub use crate::group::{group_monotonic, group_successors, GroupMonotonic, DEFAULT_MIN_RANGE_SIZE};
pub use crate::span::{Grouped, Span, SpanIter};
pub use crate::successor::Successor;
pub use crate::value::Value;
