//! The 2D k-d tree type and its node representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Axis, Point};

/// Number of dimensions indexed by the tree. The comparison axis at a node
/// of depth `d` is `d % K`.
pub(crate) const K: usize = 2;

/// A tree node owning its point and its two optional subtrees. Dropping a
/// node drops everything beneath it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<A> {
    pub(crate) point: Point<A>,
    pub(crate) left: Option<Box<Node<A>>>,
    pub(crate) right: Option<Box<Node<A>>>,
}

impl<A: Axis> Node<A> {
    pub(crate) fn new(point: Point<A>) -> Self {
        Node {
            point,
            left: None,
            right: None,
        }
    }
}

/// A two-dimensional k-d tree.
///
/// Each node splits the plane along one axis, cycling x and y with depth:
/// points with a co-ordinate less than or equal to the node's on the
/// splitting axis live in the left subtree, strictly greater ones in the
/// right. Insertion appends leaves and never rebalances, so the ordering
/// invariant established at insert time is what every query's pruning
/// relies on.
///
/// # Examples
///
/// ```rust
/// use flatkd::KdTree;
///
/// let mut tree: KdTree<f64> = KdTree::new();
/// tree.add((7.0, 2.0))?;
/// tree.add((5.0, 4.0))?;
///
/// assert_eq!(tree.size(), 2);
/// # Ok::<(), flatkd::Error>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct KdTree<A> {
    pub(crate) root: Option<Box<Node<A>>>,
    pub(crate) size: usize,
}

impl<A: Axis> Default for KdTree<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Axis> KdTree<A> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        KdTree {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of points stored in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

#[cfg(test)]
impl<A: Axis> KdTree<A> {
    /// Walks the whole tree asserting the splitting invariant: at a node of
    /// depth `d`, every point in the left subtree is `<=` the node's
    /// co-ordinate on axis `d % K` and every point in the right subtree is
    /// strictly greater.
    pub(crate) fn assert_split_invariant(&self) {
        fn each_point<A: Axis, F: FnMut(Point<A>)>(node: &Node<A>, f: &mut F) {
            f(node.point);
            if let Some(left) = &node.left {
                each_point(left, f);
            }
            if let Some(right) = &node.right {
                each_point(right, f);
            }
        }

        fn walk<A: Axis>(node: &Node<A>, depth: usize) {
            let axis = depth % K;
            let split = node.point.coord(axis);
            if let Some(left) = &node.left {
                each_point(left, &mut |p| {
                    assert!(
                        p.coord(axis) <= split,
                        "left subtree of {:?} (depth {}) holds {:?}",
                        node.point,
                        depth,
                        p
                    );
                });
                walk(left, depth + 1);
            }
            if let Some(right) = &node.right {
                each_point(right, &mut |p| {
                    assert!(
                        p.coord(axis) > split,
                        "right subtree of {:?} (depth {}) holds {:?}",
                        node.point,
                        depth,
                        p
                    );
                });
                walk(right, depth + 1);
            }
        }

        if let Some(root) = &self.root {
            walk(root, 0);
        }
    }
}
