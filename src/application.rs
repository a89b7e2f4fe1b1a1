//! Application layer - review scraping pipeline
//!
//! Owns the two fetch-and-parse operations and the end-to-end run:
//! discover the companion name from the drug information page, pull the
//! review excerpts from the matching reviews page, export them to CSV.

use crate::domain::slugify;
use crate::infrastructure::export::ReviewCsvExporter;
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::parsing::{CompanionParser, HtmlParser, ParsingConfig, ReviewParser};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use scraper::Html;
use std::path::PathBuf;
use tracing::{debug, info};

/// Sequential scraping pipeline for one drug name
pub struct ReviewScraper {
    http: HttpClient,
    config: ParsingConfig,
    companion_parser: CompanionParser,
    review_parser: ReviewParser,
    exporter: ReviewCsvExporter,
}

impl ReviewScraper {
    /// Create a pipeline with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ParsingConfig::default())
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: ParsingConfig) -> Result<Self> {
        let companion_parser = CompanionParser::with_config(&config.companion_selectors)?;
        let review_parser = ReviewParser::with_config(&config.review_selectors)?;

        Ok(Self {
            http: HttpClient::new()?,
            config,
            companion_parser,
            review_parser,
            exporter: ReviewCsvExporter::new(),
        })
    }

    /// Run the full pipeline for a drug name and return the output file path.
    ///
    /// The name is trimmed before use. The output lands in the current
    /// directory as `<slug>_reviews.csv`, overwriting any previous run.
    pub async fn run(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        info!("Scraping reviews for '{}'", name);

        let companion = self.extract_companion(name).await?;
        let reviews = self.extract_reviews(name, companion.as_deref()).await?;

        let path = PathBuf::from(format!("{}_reviews.csv", slugify(name)));
        self.exporter
            .write(&reviews, &path)
            .with_context(|| format!("Failed to export reviews for '{}'", name))?;

        Ok(path)
    }

    /// Discover the companion (generic/brand) name from the drug page.
    ///
    /// A non-success status is a silent miss: the pipeline continues without
    /// a companion. Only transport-level failures surface as errors.
    pub async fn extract_companion(&self, primary: &str) -> Result<Option<String>> {
        let url = self.companion_url(primary);
        let response = self.http.get(&url).await?;

        if !response.status().is_success() {
            debug!("Drug page fetch returned {}, continuing without companion", response.status());
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read drug page body from {}", url))?;
        let html = Html::parse_document(&body);

        Ok(self.companion_parser.parse(&html)?)
    }

    /// Fetch the reviews page and extract cleaned review excerpts.
    ///
    /// A non-success status degrades to a single sentinel row embedding the
    /// status code; a page without usable reviews degrades to the
    /// "No reviews found." row. Both travel in the same vector as real
    /// reviews, matching the exported file's contract.
    pub async fn extract_reviews(
        &self,
        primary: &str,
        companion: Option<&str>,
    ) -> Result<Vec<String>> {
        let url = self.reviews_url(primary, companion);
        let response = self.http.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Reviews page fetch returned {}", status);
            return Ok(vec![failed_fetch_row(status)]);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read reviews page body from {}", url))?;
        let html = Html::parse_document(&body);

        Ok(self.review_parser.parse(&html)?)
    }

    /// Request target for the drug information page
    fn companion_url(&self, primary: &str) -> String {
        format!("{}/{}.html", self.config.base_url, slugify(primary))
    }

    /// Request target for the reviews page.
    ///
    /// The companion slug comes first; when no companion exists the segment
    /// stays empty, leaving a doubled separator. The upstream server still
    /// routes that form, so it is kept as-is.
    fn reviews_url(&self, primary: &str, companion: Option<&str>) -> String {
        let companion_slug = companion.map(slugify).unwrap_or_default();
        format!(
            "{}/comments/{}/{}.html",
            self.config.base_url,
            companion_slug,
            slugify(primary)
        )
    }
}

/// Sentinel row emitted when the reviews page fetch returns a non-success status
fn failed_fetch_row(status: StatusCode) -> String {
    format!("Failed to retrieve reviews page. Status Code: {}", status.as_u16())
}
