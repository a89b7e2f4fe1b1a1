//! Parsing configuration
//!
//! Centralized configuration for request targets and CSS selectors. The
//! defaults target drugs.com; everything is overridable for tests.

use serde::{Deserialize, Serialize};

/// Main parsing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Base URL all request paths are built against
    pub base_url: String,

    /// Selectors for the drug information page
    pub companion_selectors: CompanionSelectors,

    /// Selectors for the reviews page
    pub review_selectors: ReviewSelectors,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.drugs.com".to_string(),
            companion_selectors: CompanionSelectors::default(),
            review_selectors: ReviewSelectors::default(),
        }
    }
}

/// Selectors and markers for companion name discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionSelectors {
    /// Heading selectors scanned for the marker phrase - multiple fallbacks
    pub heading: Vec<String>,

    /// Literal phrase a heading must contain to be considered
    pub marker_phrase: String,
}

impl Default for CompanionSelectors {
    fn default() -> Self {
        Self {
            heading: vec!["h2".to_string()],
            marker_phrase: "More about".to_string(),
        }
    }
}

/// Selectors for review containers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSelectors {
    /// Selectors for one review container - multiple fallbacks
    pub container: Vec<String>,
}

impl Default for ReviewSelectors {
    fn default() -> Self {
        Self {
            container: vec!["div.ddc-comment".to_string()],
        }
    }
}
