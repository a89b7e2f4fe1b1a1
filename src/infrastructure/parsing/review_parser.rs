//! Review excerpt parser
//!
//! Selects every review container on a reviews page, flattens its text, and
//! keeps the first double-quoted span of each as the review excerpt. The
//! quoted span is the reviewer's own words; everything around it (ratings,
//! dates, helpfulness counts) is discarded.

use super::{HtmlParser, ParsingError, ParsingResult, companion_parser::compile_selectors};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Placeholder row emitted when a reviews page yields no usable excerpts
pub const NO_REVIEWS_SENTINEL: &str = "No reviews found.";

/// Pattern capturing a double-quoted span, non-greedy, non-nested
const QUOTED_SPAN: &str = r#""(.*?)""#;

/// Parser extracting cleaned review excerpts from a reviews page
pub struct ReviewParser {
    container_selectors: Vec<Selector>,
    quoted_span: Regex,
}

impl ReviewParser {
    /// Create a parser with default drugs.com selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&super::config::ReviewSelectors::default())
    }

    /// Create a parser with custom selector configuration
    pub fn with_config(selectors: &super::config::ReviewSelectors) -> ParsingResult<Self> {
        let quoted_span =
            Regex::new(QUOTED_SPAN).map_err(|e| ParsingError::invalid_pattern(QUOTED_SPAN, e))?;

        Ok(Self {
            container_selectors: compile_selectors(&selectors.container)?,
            quoted_span,
        })
    }

    /// Extract the first double-quoted span from a raw review fragment.
    ///
    /// Returns `None` when the fragment contains no quoted text. Escaped
    /// quotes and multi-paragraph reviews are not handled; only the first
    /// span is kept.
    pub fn clean_fragment(&self, fragment: &str) -> Option<String> {
        self.quoted_span
            .captures(fragment)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Flatten a container's text content, trimming each text node
    fn flatten_text(element: ElementRef<'_>) -> String {
        element
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<String>()
    }

    /// Select review containers, trying each configured selector in turn
    fn select_containers<'a>(&self, html: &'a Html) -> Vec<ElementRef<'a>> {
        for selector in &self.container_selectors {
            let elements: Vec<_> = html.select(selector).collect();
            if !elements.is_empty() {
                return elements;
            }
        }
        Vec::new()
    }
}

impl HtmlParser for ReviewParser {
    type Output = Vec<String>;

    /// Extract cleaned review excerpts in document order.
    ///
    /// Fragments without a quoted span are dropped; the relative order of the
    /// rest is preserved. An empty result degrades to the single
    /// [`NO_REVIEWS_SENTINEL`] row rather than an error.
    fn parse(&self, html: &Html) -> ParsingResult<Self::Output> {
        let containers = self.select_containers(html);
        debug!("Found {} review containers", containers.len());

        let cleaned: Vec<String> = containers
            .into_iter()
            .map(Self::flatten_text)
            .filter_map(|fragment| self.clean_fragment(&fragment))
            .collect();

        if cleaned.is_empty() {
            debug!("No cleanable review fragments on page");
            return Ok(vec![NO_REVIEWS_SENTINEL.to_string()]);
        }

        debug!("Extracted {} cleaned reviews", cleaned.len());
        Ok(cleaned)
    }
}
