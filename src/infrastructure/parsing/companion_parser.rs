//! Companion name parser
//!
//! Scans a drug information page for the first heading containing the
//! "More about" marker phrase and captures the name enclosed in parentheses
//! within it, e.g. `More about Lorazepam (Ativan)` yields `Ativan`.

use super::{HtmlParser, ParsingError, ParsingResult};
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, warn};

/// Pattern capturing the innermost parenthesized group, non-greedy
const PARENTHESIZED: &str = r"\((.*?)\)";

/// Parser extracting the companion (generic/brand) name from a drug page
pub struct CompanionParser {
    heading_selectors: Vec<Selector>,
    marker_phrase: String,
    parenthesized: Regex,
}

impl CompanionParser {
    /// Create a parser with default drugs.com selectors
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&super::config::CompanionSelectors::default())
    }

    /// Create a parser with custom selector configuration
    pub fn with_config(selectors: &super::config::CompanionSelectors) -> ParsingResult<Self> {
        let parenthesized = Regex::new(PARENTHESIZED)
            .map_err(|e| ParsingError::invalid_pattern(PARENTHESIZED, e))?;

        Ok(Self {
            heading_selectors: compile_selectors(&selectors.heading)?,
            marker_phrase: selectors.marker_phrase.clone(),
            parenthesized,
        })
    }
}

impl HtmlParser for CompanionParser {
    type Output = Option<String>;

    /// Find the companion name, or `None` when the marker heading is absent
    /// or carries no parenthesized segment.
    fn parse(&self, html: &Html) -> ParsingResult<Self::Output> {
        for selector in &self.heading_selectors {
            for heading in html.select(selector) {
                let text = heading.text().collect::<String>();
                if !text.contains(&self.marker_phrase) {
                    continue;
                }

                // Only the first matching heading is considered
                let companion = self
                    .parenthesized
                    .captures(text.trim())
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string());

                match &companion {
                    Some(name) => debug!("Found companion name: {}", name),
                    None => debug!("Marker heading has no parenthesized segment"),
                }
                return Ok(companion);
            }
        }

        debug!("No heading containing '{}' found", self.marker_phrase);
        Ok(None)
    }
}

/// Compile selector strings, logging and skipping invalid ones
pub(super) fn compile_selectors(selector_strings: &[String]) -> ParsingResult<Vec<Selector>> {
    let mut selectors = Vec::new();

    for selector_str in selector_strings {
        match Selector::parse(selector_str) {
            Ok(selector) => selectors.push(selector),
            Err(e) => warn!("Failed to compile selector '{}': {}", selector_str, e),
        }
    }

    if selectors.is_empty() && !selector_strings.is_empty() {
        return Err(ParsingError::invalid_selector(
            &selector_strings.join(", "),
            "no valid selectors compiled",
        ));
    }

    Ok(selectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_page(body: &str) -> Option<String> {
        let parser = CompanionParser::new().unwrap();
        let html = Html::parse_document(body);
        parser.parse(&html).unwrap()
    }

    #[test]
    fn test_extracts_bracketed_name() {
        let body = r#"
            <html><body>
                <h2>Side effects</h2>
                <h2>More about Lorazepam (Ativan)</h2>
            </body></html>
        "#;
        assert_eq!(parse_page(body), Some("Ativan".to_string()));
    }

    #[test]
    fn test_no_marker_heading() {
        let body = "<html><body><h2>Dosage information</h2></body></html>";
        assert_eq!(parse_page(body), None);
    }

    #[test]
    fn test_marker_heading_without_brackets() {
        let body = "<html><body><h2>More about Lorazepam</h2></body></html>";
        assert_eq!(parse_page(body), None);
    }

    #[test]
    fn test_first_heading_and_first_group_win() {
        let body = r#"
            <html><body>
                <h2>More about Lorazepam (Ativan) (Generic)</h2>
                <h2>More about Diazepam (Valium)</h2>
            </body></html>
        "#;
        assert_eq!(parse_page(body), Some("Ativan".to_string()));
    }

    #[test]
    fn test_invalid_selector_list_rejected() {
        let selectors = super::super::config::CompanionSelectors {
            heading: vec![":::".to_string()],
            marker_phrase: "More about".to_string(),
        };
        assert!(CompanionParser::with_config(&selectors).is_err());
    }
}
