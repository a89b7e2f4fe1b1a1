//! Infrastructure layer for HTTP, HTML parsing, CSV export, and logging

pub mod export;
pub mod http_client;
pub mod logging;
pub mod parsing;

// Re-export commonly used items
pub use export::ReviewCsvExporter;
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::init_logging;
pub use parsing::{CompanionParser, ParsingConfig, ParsingError, ParsingResult, ReviewParser};
