#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::invalid_codeblock_attributes)]

//! # flatkd
//!
//! A two-dimensional k-d tree for spatial point lookups.
//!
//! Points are inserted one at a time and indexed by cycling the comparison
//! axis with tree depth (x at even depths, y at odd depths). Queries walk
//! the same structure and prune every subtree whose implied bounds cannot
//! contain a qualifying point, which keeps rectangular range queries and
//! nearest-neighbour queries sub-linear on reasonably distributed data.
//!
//! The tree is never rebalanced: a pathological insertion order (strictly
//! increasing co-ordinates, say) degrades it towards a linked list and makes
//! every operation linear in the number of points. Both query traversals run
//! off explicit work-stacks, so even a fully skewed tree cannot exhaust the
//! call stack.
//!
//! ## Usage
//! ```rust
//! use flatkd::{KdTree, Point};
//!
//! let mut tree: KdTree<f64> = KdTree::new();
//! tree.insert([
//!     (7.0, 2.0),
//!     (5.0, 4.0),
//!     (9.0, 6.0),
//!     (4.0, 7.0),
//!     (8.0, 1.0),
//!     (2.0, 3.0),
//! ])?;
//!
//! let mut found = tree.within(Point::new(0.0, 0.0), Point::new(6.0, 6.0))?;
//! found.sort_by(|a, b| a.partial_cmp(b).unwrap());
//! assert_eq!(found, vec![Point::new(2.0, 3.0), Point::new(5.0, 4.0)]);
//!
//! let nearest = tree.nearest_one((6.0, 5.0))?;
//! assert_eq!(nearest.point, Point::new(5.0, 4.0));
//! assert!((nearest.distance - 2f64.sqrt()).abs() < f64::EPSILON);
//! # Ok::<(), flatkd::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! Mutation is strictly single-writer: external synchronization is required
//! if multiple threads insert. Queries take `&self` and the tree holds no
//! interior mutability, so any number of threads may query a tree that is
//! not being mutated.

#[doc(hidden)]
pub mod construction;
pub mod distance;
mod error;
pub mod kdtree;
mod neighbour;
#[doc(hidden)]
pub mod query;
pub mod types;

pub use crate::error::Error;
pub use crate::kdtree::KdTree;
pub use crate::neighbour::Neighbour;
pub use crate::types::{Axis, Point, Rect};
