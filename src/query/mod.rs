//! Query implementations for [`KdTree`](crate::KdTree).

pub mod nearest_one;
pub mod within;
