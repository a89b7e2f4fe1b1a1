//! Domain module - Core value objects
//!
//! Contains the value types the pipeline passes around: the URL slug
//! transform and the serially numbered review record written to CSV.

pub mod review;
pub mod slug;

// Re-export commonly used items for convenience
pub use review::ReviewRecord;
pub use slug::slugify;
