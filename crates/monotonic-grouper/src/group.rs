use std::borrow::Cow;

use num::BigInt;

use crate::{GroupError, GroupResult, Grouped, Span, Successor, Value};

/// Default minimum run length eligible for range emission.
pub const DEFAULT_MIN_RANGE_SIZE: usize = 3;

/// The grouping strategy, resolved once per call from the first element's
/// kind and fixed for the whole scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Integer,
    #[cfg(feature = "date")]
    Date,
    Successor,
}

impl Strategy {
    fn select(first: &Value) -> GroupResult<Strategy> {
        match first {
            Value::Int(_) | Value::BigInt(_) => Ok(Strategy::Integer),
            #[cfg(feature = "date")]
            Value::Date(_) => Ok(Strategy::Date),
            Value::Char(_) => Ok(Strategy::Successor),
            other => Err(GroupError::UnsupportedElementKind { kind: other.kind() }),
        }
    }

    #[cfg_attr(not(feature = "date"), allow(unused_variables))]
    fn adjacency(self, first: &Value) -> Adjacency {
        match self {
            Strategy::Integer => Adjacency::Integer,
            #[cfg(feature = "date")]
            Strategy::Date => Adjacency::Date {
                prev_ord: ordinal(first),
            },
            Strategy::Successor => Adjacency::Successor,
        }
    }
}

/// Per-strategy adjacency predicate, carrying the cached per-element
/// projection where one exists (the previous element's day ordinal for
/// dates).
enum Adjacency {
    Integer,
    #[cfg(feature = "date")]
    Date { prev_ord: i32 },
    Successor,
}

impl Adjacency {
    /// Whether `curr` is the immediate successor of `prev`, stepping any
    /// cached state forward to `curr`.
    fn advance(&mut self, prev: &Value, curr: &Value) -> bool {
        match self {
            Adjacency::Integer => int_adjacent(prev, curr),
            #[cfg(feature = "date")]
            Adjacency::Date { prev_ord } => {
                let curr_ord = ordinal(curr);
                let adjacent = curr_ord == *prev_ord + 1;
                *prev_ord = curr_ord;
                adjacent
            }
            Adjacency::Successor => prev.successor().is_some_and(|s| s == *curr),
        }
    }
}

/// `curr == prev + 1` on the native fast path when both operands fit; the
/// comparison never wraps. `i64::MAX + 1` and any `BigInt` operand go
/// through the arbitrary-precision comparison instead.
fn int_adjacent(prev: &Value, curr: &Value) -> bool {
    if let (Value::Int(a), Value::Int(b)) = (prev, curr) {
        if let Some(next) = a.checked_add(1) {
            return next == *b;
        }
    }
    &*as_big(prev) + 1u32 == *as_big(curr)
}

fn as_big(v: &Value) -> Cow<'_, BigInt> {
    match v {
        Value::Int(v) => Cow::Owned(BigInt::from(*v)),
        Value::BigInt(v) => Cow::Borrowed(v),
        _ => unreachable!("integer strategy only sees integer values"),
    }
}

#[cfg(feature = "date")]
fn ordinal(v: &Value) -> i32 {
    use chrono::Datelike;
    match v {
        Value::Date(d) => d.num_days_from_ce(),
        _ => unreachable!("date strategy only sees date values"),
    }
}

/// One open run of adjacent elements: `start..=end` with `len` elements.
struct Run<T> {
    start: T,
    end: T,
    len: usize,
}

impl<T: Successor> Run<T> {
    fn open(first: T) -> Self {
        Run {
            start: first.clone(),
            end: first,
            len: 1,
        }
    }

    fn extend(&mut self, curr: T) {
        self.end = curr;
        self.len += 1;
    }

    /// Close the run: one range marker if it meets the threshold, otherwise
    /// the run's elements reproduced in order by the successor walk.
    fn flush_into(self, min_range_size: usize, out: &mut Vec<Grouped<T>>) {
        if self.len >= min_range_size {
            out.push(Grouped::Range(Span::new(self.start, self.end)));
            return;
        }

        let mut curr = self.start;
        for _ in 1..self.len {
            // adjacency held at every step of the run, so each successor exists
            let next = curr.successor().unwrap();
            out.push(Grouped::Item(curr));
            curr = next;
        }
        out.push(Grouped::Item(curr));
    }
}

/// Group an ordered sequence of [Value]s into runs of adjacent elements and
/// re-emit it as range markers and loose elements.
///
/// Runs with at least `min_range_size` elements collapse into one inclusive
/// [Span]; shorter runs pass through element by element. The strategy is
/// picked from the first element's kind and every later element must match
/// it. The input is scanned exactly once and never mutated.
///
/// ```
/// use monotonic_grouper::{group_monotonic, Grouped, Span, Value};
///
/// let items: Vec<Value> = [1, 2, 3, 7, 8, 20].map(Value::from).to_vec();
/// let out = group_monotonic(&items, 3).unwrap();
/// assert_eq!(out.len(), 4);
/// assert_eq!(out[0], Grouped::Range(Span::new(Value::Int(1), Value::Int(3))));
/// assert_eq!(out[1], Grouped::Item(Value::Int(7)));
/// assert_eq!(out[3], Grouped::Item(Value::Int(20)));
/// ```
pub fn group_monotonic(items: &[Value], min_range_size: usize) -> GroupResult<Vec<Grouped<Value>>> {
    if min_range_size < 1 {
        return Err(GroupError::InvalidThreshold {
            got: min_range_size,
        });
    }

    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };
    let strategy = Strategy::select(first)?;
    let expected = first.kind();
    let mut adjacency = strategy.adjacency(first);

    let mut out = Vec::with_capacity(items.len() / 2);
    let mut run = Run::open(first.clone());
    let mut prev = first;
    for (index, curr) in items.iter().enumerate().skip(1) {
        if curr.kind() != expected {
            return Err(GroupError::InconsistentElementKind {
                expected,
                found: curr.kind(),
                index,
            });
        }

        if adjacency.advance(prev, curr) {
            run.extend(curr.clone());
        } else {
            run.flush_into(min_range_size, &mut out);
            run = Run::open(curr.clone());
        }
        prev = curr;
    }
    run.flush_into(min_range_size, &mut out);

    Ok(out)
}

/// Statically-typed variant of [group_monotonic] for any [Successor] type.
///
/// Homogeneity is enforced by the type system, so the only possible failure
/// is an invalid threshold.
pub fn group_successors<T: Successor>(
    items: &[T],
    min_range_size: usize,
) -> GroupResult<Vec<Grouped<T>>> {
    if min_range_size < 1 {
        return Err(GroupError::InvalidThreshold {
            got: min_range_size,
        });
    }

    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };
    let mut out = Vec::with_capacity(items.len() / 2);
    let mut run = Run::open(first.clone());
    for pair in items.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if prev.successor().is_some_and(|s| s == *curr) {
            run.extend(curr.clone());
        } else {
            run.flush_into(min_range_size, &mut out);
            run = Run::open(curr.clone());
        }
    }
    run.flush_into(min_range_size, &mut out);

    Ok(out)
}

/// Extension methods grafting the grouping operation onto `[Value]` slices.
pub trait GroupMonotonic {
    /// [group_monotonic] with the default threshold of 3.
    fn group_monotonic(&self) -> GroupResult<Vec<Grouped<Value>>>;
    fn group_monotonic_with(&self, min_range_size: usize) -> GroupResult<Vec<Grouped<Value>>>;
}

impl GroupMonotonic for [Value] {
    fn group_monotonic(&self) -> GroupResult<Vec<Grouped<Value>>> {
        group_monotonic(self, DEFAULT_MIN_RANGE_SIZE)
    }

    fn group_monotonic_with(&self, min_range_size: usize) -> GroupResult<Vec<Grouped<Value>>> {
        group_monotonic(self, min_range_size)
    }
}
