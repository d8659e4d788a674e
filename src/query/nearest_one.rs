//! Nearest-neighbour queries.

use crate::distance::{squared_axis_dist, squared_euclidean};
use crate::error::Error;
use crate::kdtree::{KdTree, Node, K};
use crate::neighbour::Neighbour;
use crate::types::{Axis, Point};

impl<A: Axis> KdTree<A> {
    /// Queries the tree for the stored point nearest to `query` by Euclidean
    /// distance.
    ///
    /// Every visited node competes for the running best on equal footing,
    /// the root included. The subtree on the query's side of a node's
    /// splitting line is always searched first; the far subtree is searched
    /// only while the best distance found so far still exceeds the
    /// perpendicular distance from the query to that splitting line, which
    /// is what makes the expected cost sub-linear. Squared distances are
    /// compared internally; the returned [`Neighbour::distance`] is the true
    /// Euclidean distance.
    ///
    /// Among equidistant points the winner is the first found in traversal
    /// order: deterministic for a given tree, but not otherwise specified.
    ///
    /// Returns [`Error::EmptyTree`] if no points have been inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flatkd::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new();
    /// tree.insert([
    ///     (7.0, 2.0),
    ///     (5.0, 4.0),
    ///     (9.0, 6.0),
    ///     (4.0, 7.0),
    ///     (8.0, 1.0),
    ///     (2.0, 3.0),
    /// ])?;
    ///
    /// let nearest = tree.nearest_one((6.0, 5.0))?;
    ///
    /// assert_eq!(nearest.point, Point::new(5.0, 4.0));
    /// assert!((nearest.distance - 2f64.sqrt()).abs() < f64::EPSILON);
    /// # Ok::<(), flatkd::Error>(())
    /// ```
    pub fn nearest_one(&self, query: impl Into<Point<A>>) -> Result<Neighbour<A>, Error> {
        let root = self.root.as_deref().ok_or(Error::EmptyTree)?;
        let query = query.into();

        let mut best = Neighbour {
            distance: A::infinity(),
            point: root.point,
        };

        // Entries are (node, depth, squared distance from the query to the
        // splitting line guarding this subtree). The far child is pushed
        // before the near child so the near side is searched first, and the
        // guard is re-checked at pop time against whatever best distance the
        // near side produced in the meantime. The explicit stack also keeps
        // a fully skewed tree from overflowing the call stack.
        let mut stack: Vec<(&Node<A>, usize, A)> = vec![(root, 0, A::zero())];

        while let Some((node, depth, guard_dist)) = stack.pop() {
            if guard_dist >= best.distance {
                continue;
            }

            let dist = squared_euclidean(&node.point, &query);
            if dist < best.distance {
                best = Neighbour {
                    distance: dist,
                    point: node.point,
                };
            }

            let axis = depth % K;
            let split_dist = squared_axis_dist(query.coord(axis), node.point.coord(axis));
            let (near, far) = if query.coord(axis) <= node.point.coord(axis) {
                (node.left.as_deref(), node.right.as_deref())
            } else {
                (node.right.as_deref(), node.left.as_deref())
            };

            if let Some(far) = far {
                stack.push((far, depth + 1, split_dist));
            }
            if let Some(near) = near {
                stack.push((near, depth + 1, A::zero()));
            }
        }

        Ok(Neighbour {
            distance: best.distance.sqrt(),
            point: best.point,
        })
    }
}
