//! Distance functions used by the queries.

use crate::types::{Axis, Point};

/// Returns the squared Euclidean distance between two points.
///
/// Cheaper than the true Euclidean distance (no square root) while
/// preserving its ordering, so the queries compare squared distances
/// throughout and only take a root at the public boundary.
///
/// # Examples
///
/// ```rust
/// use flatkd::distance::squared_euclidean;
/// use flatkd::Point;
///
/// assert_eq!(squared_euclidean(&Point::new(0f64, 0f64), &Point::new(0f64, 0f64)), 0f64);
/// assert_eq!(squared_euclidean(&Point::new(0f64, 0f64), &Point::new(1f64, 0f64)), 1f64);
/// assert_eq!(squared_euclidean(&Point::new(0f64, 0f64), &Point::new(1f64, 1f64)), 2f64);
/// ```
#[inline]
pub fn squared_euclidean<A: Axis>(a: &Point<A>, b: &Point<A>) -> A {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Returns the squared distance between two values along a single axis.
///
/// Used by the nearest-neighbour query as the lower bound on the distance
/// from the query point to anything on the far side of a splitting line.
#[inline]
pub fn squared_axis_dist<A: Axis>(a: A, b: A) -> A {
    (a - b) * (a - b)
}
