//! Core library for the extents workspace: the [`Extent`](models::Extent)
//! model plus parsing utilities for the plain-text extent and query-point
//! sources. All overlap computation lives in the `extents-overlap` crate;
//! this crate only supplies already-parsed data to it.

pub mod errors;
pub mod models;
pub mod utils;

// re-export for cleaner imports
pub use self::errors::ExtentSourceError;
pub use self::models::Extent;
