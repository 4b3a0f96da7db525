use std::fmt::{self, Debug};

use enum_as_inner::EnumAsInner;

use crate::Successor;

/// An inclusive `[start, end]` range marker summarizing one run.
///
/// Unlike [std::ops::Range], both endpoints are inclusive: a run of length 1
/// emitted under threshold 1 becomes `Span { start: x, end: x }`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span<T> {
    pub start: T,
    pub end: T,
}

impl<T> Span<T> {
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Span { start, end }
    }
}

impl<T: Debug> Debug for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..={:?}", self.start, self.end)
    }
}

impl<T: Successor> Span<T> {
    /// Walk the span element by element, from `start` up to and including
    /// `end`, by repeated application of [Successor::successor].
    ///
    /// Only meaningful for well-formed spans (`end` reachable from `start`),
    /// which is true of every span this crate emits.
    pub fn iter(&self) -> SpanIter<T> {
        SpanIter {
            next: Some(self.start.clone()),
            end: self.end.clone(),
        }
    }
}

/// Iterator over the elements covered by a [Span].
pub struct SpanIter<T> {
    next: Option<T>,
    end: T,
}

impl<T: Successor> Iterator for SpanIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let curr = self.next.take()?;
        if curr != self.end {
            self.next = curr.successor();
        }
        Some(curr)
    }
}

/// One item of the grouped output: either a loose element carried over from
/// the input, or a [Span] covering a whole run.
#[derive(Clone, PartialEq, EnumAsInner)]
pub enum Grouped<T> {
    Item(T),
    Range(Span<T>),
}

impl<T: Successor> Grouped<T> {
    /// Expand back into the explicit element sequence this item covers.
    ///
    /// Concatenating the expansion of every output item reproduces the
    /// original input exactly, in order.
    pub fn expand(&self) -> Vec<T> {
        match self {
            Grouped::Item(v) => vec![v.clone()],
            Grouped::Range(span) => span.iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Grouped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grouped::Item(v) => v.fmt(f),
            Grouped::Range(span) => span.fmt(f),
        }
    }
}

impl<T> From<T> for Grouped<T> {
    fn from(value: T) -> Self {
        Grouped::Item(value)
    }
}

impl<T> From<Span<T>> for Grouped<T> {
    fn from(span: Span<T>) -> Self {
        Grouped::Range(span)
    }
}
