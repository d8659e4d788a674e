//! Point insertion.

use crate::error::Error;
use crate::kdtree::{KdTree, Node, K};
use crate::types::{Axis, Point};

#[cfg(feature = "tracing")]
use tracing::{event, Level};

impl<A: Axis> KdTree<A> {
    /// Adds a single point to the tree.
    ///
    /// Descends from the root comparing one axis per level (x at even
    /// depths, y at odd depths): a co-ordinate less than or equal to the
    /// node's routes left, a strictly greater one routes right. The point is
    /// attached as a new leaf where the descent first finds an empty slot,
    /// so duplicate co-ordinates are permitted and land in the left subtree
    /// of the node they tie with.
    ///
    /// The tree is never rebalanced. An adversarial insertion order
    /// (strictly increasing co-ordinates, say) degrades it towards a list
    /// and makes this and every later operation linear in the point count.
    ///
    /// Returns [`Error::InvalidPoint`], without mutating the tree, if either
    /// co-ordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatkd::{Error, KdTree};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    ///
    /// tree.add((7.0, 2.0))?;
    /// assert_eq!(tree.size(), 1);
    ///
    /// assert_eq!(tree.add((f64::NAN, 0.0)), Err(Error::InvalidPoint));
    /// assert_eq!(tree.size(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn add(&mut self, point: impl Into<Point<A>>) -> Result<(), Error> {
        let point = point.into();
        if !point.is_finite() {
            #[cfg(feature = "tracing")]
            event!(Level::ERROR, "rejected non-finite point {:?}", point);
            return Err(Error::InvalidPoint);
        }

        let mut cursor = &mut self.root;
        let mut depth = 0usize;
        loop {
            match cursor {
                Some(node) => {
                    let axis = depth % K;
                    cursor = if point.coord(axis) <= node.point.coord(axis) {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                    depth += 1;
                }
                None => {
                    *cursor = Some(Box::new(Node::new(point)));
                    self.size += 1;
                    #[cfg(feature = "tracing")]
                    event!(Level::TRACE, size = self.size, depth, "added point");
                    return Ok(());
                }
            }
        }
    }

    /// Adds every point of `points` to the tree, one at a time in order.
    ///
    /// Equivalent to calling [`add`](KdTree::add) in a loop: if a point with
    /// a non-finite co-ordinate is encountered, insertion stops with
    /// [`Error::InvalidPoint`] and the points preceding it remain in the
    /// tree.
    pub fn insert<P, I>(&mut self, points: I) -> Result<(), Error>
    where
        P: Into<Point<A>>,
        I: IntoIterator<Item = P>,
    {
        for point in points {
            self.add(point)?;
        }
        Ok(())
    }
}
