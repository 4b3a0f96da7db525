use thiserror::Error;

pub type GroupResult<T> = Result<T, GroupError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    #[error("min_range_size must be at least 1, got {got}")]
    InvalidThreshold { got: usize },
    #[error("elements of kind \"{kind}\" have no grouping strategy")]
    UnsupportedElementKind { kind: &'static str },
    #[error("expected every element to be a {expected}, but element {index} is a {found}")]
    InconsistentElementKind {
        expected: &'static str,
        found: &'static str,
        index: usize,
    },
}
