//! Core value types: the co-ordinate scalar trait, points and rectangles.

use num_traits::Float;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Axis represents the traits that must be implemented by the type used as
/// a co-ordinate scalar on [`Point`] and [`KdTree`](crate::KdTree). This
/// will be [`f64`] or [`f32`].
pub trait Axis: Float + Debug + Default + Copy + Sync + Send {}
impl<T: Float + Debug + Default + Copy + Sync + Send> Axis for T {}

/// A point in the plane.
///
/// Equality is componentwise; the derived ordering compares `x` first and
/// then `y`, which is handy for sorting query results in tests.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Point<A> {
    /// the horizontal co-ordinate
    pub x: A,
    /// the vertical co-ordinate
    pub y: A,
}

impl<A: Axis> Point<A> {
    /// Creates a point from its two co-ordinates.
    pub fn new(x: A, y: A) -> Self {
        Point { x, y }
    }

    /// The co-ordinate on `axis`: `0` selects x, any other value selects y.
    #[inline]
    pub(crate) fn coord(&self, axis: usize) -> A {
        if axis == 0 {
            self.x
        } else {
            self.y
        }
    }

    #[inline]
    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<A: Axis> From<(A, A)> for Point<A> {
    fn from((x, y): (A, A)) -> Self {
        Point { x, y }
    }
}

impl<A: Axis> From<[A; 2]> for Point<A> {
    fn from([x, y]: [A; 2]) -> Self {
        Point { x, y }
    }
}

/// An axis-aligned rectangle, closed on all four edges.
///
/// The corners are validated at construction, so every `Rect` in existence
/// satisfies `lower.x <= upper.x` and `lower.y <= upper.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<A> {
    lower: Point<A>,
    upper: Point<A>,
}

impl<A: Axis> Rect<A> {
    /// Creates a rectangle spanning `lower` to `upper`.
    ///
    /// Returns [`Error::InvalidRectangle`] if `lower` exceeds `upper` on
    /// either axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatkd::{Error, Point, Rect};
    ///
    /// let rect = Rect::new(Point::new(0.0, 0.0), Point::new(6.0, 6.0))?;
    /// assert!(rect.contains(&Point::new(6.0, 0.0)));
    ///
    /// let flipped = Rect::new(Point::new(6.0, 6.0), Point::new(0.0, 0.0));
    /// assert_eq!(flipped, Err(Error::InvalidRectangle));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(lower: Point<A>, upper: Point<A>) -> Result<Self, Error> {
        if lower.x > upper.x || lower.y > upper.y {
            return Err(Error::InvalidRectangle);
        }
        Ok(Rect { lower, upper })
    }

    /// The lower corner.
    pub fn lower(&self) -> Point<A> {
        self.lower
    }

    /// The upper corner.
    pub fn upper(&self) -> Point<A> {
        self.upper
    }

    /// Whether `p` lies inside the rectangle. The box is closed: a point
    /// exactly on an edge or corner counts as contained.
    #[inline]
    pub fn contains(&self, p: &Point<A>) -> bool {
        self.lower.x <= p.x && p.x <= self.upper.x && self.lower.y <= p.y && p.y <= self.upper.y
    }
}
