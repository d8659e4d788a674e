//! A result item returned by a nearest-neighbour query.

use std::cmp::Ordering;

use crate::types::{Axis, Point};

/// Represents the result of a nearest-neighbour query, with `distance` being
/// the Euclidean distance of the found point from the query point, and
/// `point` being the stored point that was found.
#[derive(Debug, Copy, Clone)]
pub struct Neighbour<A> {
    /// the Euclidean distance of the found point from the query point
    pub distance: A,
    /// the stored point that was found by the query
    pub point: Point<A>,
}

impl<A: Axis> Ord for Neighbour<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

#[allow(unknown_lints)]
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<A: Axis> PartialOrd for Neighbour<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: Axis> Eq for Neighbour<A> {}

impl<A: Axis> PartialEq for Neighbour<A> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.point == other.point
    }
}

impl<A: Axis> From<Neighbour<A>> for (A, Point<A>) {
    fn from(elem: Neighbour<A>) -> Self {
        (elem.distance, elem.point)
    }
}
