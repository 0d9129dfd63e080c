//! Point-containment counting over closed integer extents.
//!
//! This crate answers one question: for a fixed batch of closed intervals
//! ("extents") and a stream of query points, how many extents contain each
//! point? The workload it targets is heavily skewed — tens of thousands of
//! extents built once, then a much larger stream of point lookups against
//! that fixed set — so the batch is compressed up front into a sorted
//! coordinate structure and every query is a binary search.
//!
//! ## Quick Start
//!
//! ```rust
//! use extents_core::models::Extent;
//! use extents_overlap::OverlapIndex;
//!
//! let index = OverlapIndex::build(vec![
//!     Extent::new(0u32, 40),
//!     Extent::new(2, 12),
//!     Extent::new(4, 30),
//! ]);
//!
//! assert_eq!(index.containing_count(3), 2);
//! assert_eq!(index.containing_count(20), 2);
//! assert_eq!(index.containing_count(99), 0);
//! ```
//!
//! Endpoints are inclusive on both sides: an extent still contains the
//! position it ends on. The index is immutable once built and may be
//! shared freely across threads for concurrent reads.

/// Event-stream compression of an extent batch.
///
/// See [`events::compress`] for details.
pub mod events;

/// The queryable index.
///
/// See [`OverlapIndex`] for details.
pub mod index;

// re-exports
pub use self::events::OverlapRecord;
pub use self::index::OverlapIndex;
