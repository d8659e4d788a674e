//! Rectangular range queries.

use crate::error::Error;
use crate::kdtree::{KdTree, K};
use crate::types::{Axis, Point, Rect};

impl<A: Axis> KdTree<A> {
    /// Finds every stored point inside the closed rectangle spanned by
    /// `lower` and `upper`.
    ///
    /// Results are returned in arbitrary order; callers needing a stable
    /// order must sort. Returns [`Error::InvalidRectangle`] if `lower`
    /// exceeds `upper` on either axis. An empty tree yields an empty
    /// result, not an error.
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
    /// let mut found = tree.within(Point::new(0.0, 0.0), Point::new(6.0, 6.0))?;
    /// found.sort_by(|a, b| a.partial_cmp(b).unwrap());
    ///
    /// assert_eq!(found, vec![Point::new(2.0, 3.0), Point::new(5.0, 4.0)]);
    /// # Ok::<(), flatkd::Error>(())
    /// ```
    #[inline]
    pub fn within(&self, lower: Point<A>, upper: Point<A>) -> Result<Vec<Point<A>>, Error> {
        let rect = Rect::new(lower, upper)?;
        Ok(self.within_rect(&rect))
    }

    /// Finds every stored point inside an already-validated [`Rect`].
    ///
    /// At each node the splitting co-ordinate is tested against the
    /// rectangle's bounds on that node's axis: a subtree on the wrong side
    /// of a bound cannot hold a match (by the tree's ordering invariant) and
    /// is pruned; when the co-ordinate falls inside the bounds the node
    /// itself is tested for full containment and both subtrees are visited,
    /// since points on either side may still qualify on the other axis.
    pub fn within_rect(&self, rect: &Rect<A>) -> Vec<Point<A>> {
        let mut matching = Vec::new();

        // Nodes still to examine, with their depths. An explicit stack keeps
        // a fully skewed tree from overflowing the call stack.
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0usize));
        }

        while let Some((node, depth)) = stack.pop() {
            let axis = depth % K;
            let split = node.point.coord(axis);

            if split > rect.upper().coord(axis) {
                // everything in the right subtree is strictly greater than
                // split on this axis, so it lies beyond the upper bound too
                if let Some(left) = node.left.as_deref() {
                    stack.push((left, depth + 1));
                }
            } else if split < rect.lower().coord(axis) {
                if let Some(right) = node.right.as_deref() {
                    stack.push((right, depth + 1));
                }
            } else {
                if rect.contains(&node.point) {
                    matching.push(node.point);
                }
                if let Some(left) = node.left.as_deref() {
                    stack.push((left, depth + 1));
                }
                if let Some(right) = node.right.as_deref() {
                    stack.push((right, depth + 1));
                }
            }
        }

        matching
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::kdtree::KdTree;
    use crate::types::{Point, Rect};
    use rand::Rng;

    fn sorted(mut points: Vec<Point<f64>>) -> Vec<Point<f64>> {
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        points
    }

    #[test]
    fn finds_the_points_inside_the_rectangle() {
        let mut tree: KdTree<f64> = KdTree::new();
        tree.insert([(7.0, 2.0), (5.0, 4.0), (9.0, 6.0), (4.0, 7.0), (8.0, 1.0), (2.0, 3.0)])
            .unwrap();

        let found = tree
            .within(Point::new(0.0, 0.0), Point::new(6.0, 6.0))
            .unwrap();

        assert_eq!(
            sorted(found),
            vec![Point::new(2.0, 3.0), Point::new(5.0, 4.0)]
        );
    }

    #[test]
    fn rectangle_beyond_the_point_set_yields_nothing() {
        let mut tree: KdTree<f64> = KdTree::new();
        for x in 0..100 {
            for y in 0..100 {
                tree.add((x as f64, y as f64)).unwrap();
            }
        }

        let found = tree
            .within(Point::new(500.0, 500.0), Point::new(504.0, 504.0))
            .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn boundary_points_are_included() {
        let mut tree: KdTree<f64> = KdTree::new();
        tree.insert([(0.0, 0.0), (6.0, 6.0), (0.0, 6.0), (6.0, 0.0), (3.0, 3.0), (6.1, 3.0)])
            .unwrap();

        let found = tree
            .within(Point::new(0.0, 0.0), Point::new(6.0, 6.0))
            .unwrap();

        assert_eq!(found.len(), 5);
        assert!(!found.contains(&Point::new(6.1, 3.0)));
    }

    #[test]
    fn empty_tree_yields_an_empty_result() {
        let tree: KdTree<f64> = KdTree::new();

        let found = tree
            .within(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
            .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn flipped_rectangle_is_an_error() {
        let mut tree: KdTree<f64> = KdTree::new();
        tree.add((1.0, 1.0)).unwrap();

        assert_eq!(
            tree.within(Point::new(5.0, 0.0), Point::new(0.0, 5.0)),
            Err(Error::InvalidRectangle)
        );
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let mut tree: KdTree<f64> = KdTree::new();
        tree.insert([(7.0, 2.0), (5.0, 4.0), (9.0, 6.0), (4.0, 7.0), (8.0, 1.0), (2.0, 3.0)])
            .unwrap();

        let first = tree
            .within(Point::new(0.0, 0.0), Point::new(8.0, 8.0))
            .unwrap();
        let second = tree
            .within(Point::new(0.0, 0.0), Point::new(8.0, 8.0))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn matches_a_linear_scan_on_random_data() {
        let mut rng = rand::rng();

        let points: Vec<Point<f64>> = (0..500)
            .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();

        let mut tree: KdTree<f64> = KdTree::new();
        tree.insert(points.iter().copied()).unwrap();

        for _ in 0..200 {
            let ax: f64 = rng.random_range(0.0..100.0);
            let ay: f64 = rng.random_range(0.0..100.0);
            let bx: f64 = rng.random_range(0.0..100.0);
            let by: f64 = rng.random_range(0.0..100.0);
            let lower = Point::new(ax.min(bx), ay.min(by));
            let upper = Point::new(ax.max(bx), ay.max(by));

            let rect = Rect::new(lower, upper).unwrap();
            let expected: Vec<Point<f64>> =
                points.iter().filter(|p| rect.contains(p)).copied().collect();

            let found = tree.within(lower, upper).unwrap();

            assert_eq!(sorted(found), sorted(expected));
        }
    }

    #[test]
    fn degenerate_tree_still_answers_correctly() {
        // strictly increasing co-ordinates: the tree is a right spine of
        // height 10_000, which the explicit-stack traversal must handle
        let mut tree: KdTree<f64> = KdTree::new();
        tree.insert((0..10_000).map(|i| (i as f64, i as f64)))
            .unwrap();

        let found = tree
            .within(Point::new(100.0, 100.0), Point::new(104.0, 104.0))
            .unwrap();

        assert_eq!(
            sorted(found),
            (100..=104).map(|i| Point::new(i as f64, i as f64)).collect::<Vec<_>>()
        );
    }
}
