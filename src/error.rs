//! Failure conditions surfaced by tree operations.

use thiserror::Error;

/// Errors returned by [`KdTree`](crate::KdTree) operations.
///
/// Every variant is a precondition violation detected before traversal
/// begins: an operation that returns an error has neither mutated the tree
/// nor produced partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A nearest-neighbour query was issued against a tree holding no points.
    #[error("nearest-neighbour query on an empty tree")]
    EmptyTree,

    /// A range-query rectangle had its lower corner above its upper corner
    /// on at least one axis.
    #[error("invalid rectangle: lower corner must not exceed upper corner on either axis")]
    InvalidRectangle,

    /// A point with a NaN or infinite co-ordinate was passed to insertion.
    #[error("invalid point: co-ordinates must be finite")]
    InvalidPoint,
}
