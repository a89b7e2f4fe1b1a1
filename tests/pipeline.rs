//! End-to-end test of the parse, clean, and export path without network
use drug_reviews::infrastructure::parsing::HtmlParser;
use drug_reviews::{CompanionParser, ReviewCsvExporter, ReviewParser, slugify};
use scraper::Html;

const DRUG_PAGE: &str = r#"
<html><body>
    <h1>Lorazepam</h1>
    <h2>Dosage</h2>
    <h2>More about Lorazepam (Ativan)</h2>
</body></html>
"#;

const REVIEWS_PAGE: &str = r#"
<html><body>
    <div class="ddc-comment">
        <p>"Took the edge off within thirty minutes"</p>
        <span>Rated 9/10</span>
    </div>
    <div class="ddc-comment">
        <p>Anonymous, June 2024 - no excerpt provided</p>
    </div>
    <div class="ddc-comment">
        <p>"Left me groggy the next morning"</p>
    </div>
</body></html>
"#;

#[test]
fn scrape_parse_and_export_round() {
    let companion = CompanionParser::new()
        .unwrap()
        .parse(&Html::parse_document(DRUG_PAGE))
        .unwrap();
    assert_eq!(companion.as_deref(), Some("Ativan"));

    let reviews = ReviewParser::new()
        .unwrap()
        .parse(&Html::parse_document(REVIEWS_PAGE))
        .unwrap();
    assert_eq!(
        reviews,
        vec![
            "Took the edge off within thirty minutes".to_string(),
            "Left me groggy the next morning".to_string(),
        ]
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{}_reviews.csv", slugify("Lorazepam")));
    ReviewCsvExporter::new().write(&reviews, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Serial No.,Review");
    assert_eq!(lines[1], "1,Took the edge off within thirty minutes");
    assert_eq!(lines[2], "2,Left me groggy the next morning");
}

#[test]
fn missing_companion_heading_degrades_to_none() {
    let page = "<html><body><h2>Side effects</h2></body></html>";
    let companion = CompanionParser::new()
        .unwrap()
        .parse(&Html::parse_document(page))
        .unwrap();
    assert_eq!(companion, None);
}

#[test]
fn empty_reviews_page_exports_sentinel_row() {
    let reviews = ReviewParser::new()
        .unwrap()
        .parse(&Html::parse_document("<html><body></body></html>"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_reviews.csv");
    ReviewCsvExporter::new().write(&reviews, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents.lines().collect::<Vec<_>>(),
        vec!["Serial No.,Review", "1,No reviews found."]
    );
}
