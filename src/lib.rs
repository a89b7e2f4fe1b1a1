//! drug-reviews - Drug review extraction pipeline
//!
//! Fetches a drug information page, discovers the companion (generic/brand)
//! name from its "More about" heading, fetches the matching reviews page,
//! extracts the quoted excerpt of each review, and exports the result to CSV.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the main entry points for binary and test use
pub use application::ReviewScraper;
pub use domain::slug::slugify;
pub use infrastructure::export::ReviewCsvExporter;
pub use infrastructure::parsing::{CompanionParser, ParsingConfig, ReviewParser};
