//! HTML parsing infrastructure
//!
//! Trait-based parsers for the two page types the pipeline visits: the drug
//! information page (companion name discovery) and the reviews page (review
//! excerpt extraction).

pub mod companion_parser;
pub mod config;
pub mod error;
pub mod review_parser;

// Re-export public types
pub use companion_parser::CompanionParser;
pub use config::{CompanionSelectors, ParsingConfig, ReviewSelectors};
pub use error::{ParsingError, ParsingResult};
pub use review_parser::ReviewParser;

use scraper::Html;

/// Generic HTML parser trait for type-safe page extraction
pub trait HtmlParser {
    type Output;

    /// Parse a loaded HTML document into the parser's output type
    fn parse(&self, html: &Html) -> ParsingResult<Self::Output>;
}
