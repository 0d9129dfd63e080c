pub mod extent;

// re-export for cleaner imports
pub use self::extent::Extent;
