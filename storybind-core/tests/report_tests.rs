// Tests for run report generation

use chrono::Local;
use std::path::PathBuf;
use storybind_core::run::RunSummary;
use storybind_core::{extract_url_path, generate_run_report};
use storybind_crawler::PageVisit;

// ============================================================================
// URL Path Extraction Tests
// ============================================================================

#[test]
fn test_extract_url_path_root() {
    assert_eq!(extract_url_path("http://example.test/"), "/");
}

#[test]
fn test_extract_url_path_empty_path() {
    assert_eq!(extract_url_path("http://example.test"), "/");
}

#[test]
fn test_extract_url_path_nested() {
    assert_eq!(
        extract_url_path("http://example.test/post/42.html"),
        "/post/42.html"
    );
}

#[test]
fn test_extract_url_path_with_query() {
    assert_eq!(extract_url_path("http://example.test/post?p=2"), "/post");
}

#[test]
fn test_extract_url_path_unparseable_passes_through() {
    assert_eq!(extract_url_path("not a url"), "not a url");
}

// ============================================================================
// Report Content Tests
// ============================================================================

fn summary_with(visits: Vec<PageVisit>, pages_saved: usize, output: Option<PathBuf>) -> RunSummary {
    RunSummary {
        seed: "https://example.test/post/42.html".to_string(),
        started_at: Local::now(),
        duration_ms: 12,
        pages_visited: visits.len(),
        pages_saved,
        output,
        visits,
    }
}

fn visit(url: &str) -> PageVisit {
    PageVisit::new(url.to_string())
}

#[test]
fn test_report_counts_and_output_path() {
    let mut saved = visit("https://example.test/post/42.html");
    saved.image_fetched = true;

    let summary = summary_with(vec![saved], 1, Some(PathBuf::from("story_42.pdf")));
    let report = generate_run_report(&summary);

    assert!(report.contains("Pages visited: 1"));
    assert!(report.contains("Images saved: 1"));
    assert!(report.contains("story_42.pdf"));
    assert!(report.contains("/post/42.html"));
}

#[test]
fn test_report_marks_imageless_and_failed_pages() {
    let mut saved = visit("https://example.test/post/42.html");
    saved.image_fetched = true;
    let bare = visit("https://example.test/post/43.html");
    let mut failed = visit("https://example.test/post/44.html");
    failed.error = Some("image download failed: 404".to_string());

    let summary = summary_with(vec![saved, bare, failed], 1, None);
    let report = generate_run_report(&summary);

    assert!(report.contains("✓"));
    assert!(report.contains("no image"));
    assert!(report.contains("image download failed: 404"));
    assert!(report.contains("Output: none"));
}
