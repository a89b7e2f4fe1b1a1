//! drug-reviews binary
//!
//! Prompts for a drug name, runs the scraping pipeline, and reports the
//! output file.

use anyhow::Result;
use dialoguer::{Input, theme::ColorfulTheme};
use drug_reviews::ReviewScraper;
use drug_reviews::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the drug name (e.g., 'Ativan')")
        .interact_text()?;

    let scraper = ReviewScraper::new()?;
    let path = scraper.run(&name).await?;

    println!("✅ Reviews extracted and saved to {}", path.display());
    Ok(())
}
