// Human-readable run report

use crate::run::RunSummary;
use url::Url;

/// Extract the path component from a URL for compact per-page lines.
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Generate the text report for a finished run.
pub fn generate_run_report(summary: &RunSummary) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Seed page: {}\n", summary.seed));
    report.push_str(&format!("  Pages visited: {}\n", summary.pages_visited));
    report.push_str(&format!("  Images saved: {}\n", summary.pages_saved));
    match &summary.output {
        Some(path) => report.push_str(&format!("  Output: {}\n", path.display())),
        None => report.push_str("  Output: none (no images found)\n"),
    }

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Pages:\n");

    for visit in &summary.visits {
        let path = extract_url_path(&visit.url);

        // Green check for a saved image, plain circle for an imageless
        // page, red cross for a recovered failure.
        let line = if visit.image_fetched {
            format!("  \x1b[32m✓\x1b[0m {}", path)
        } else if let Some(error) = &visit.error {
            format!("  \x1b[31m✗\x1b[0m {} \x1b[90m{}\x1b[0m", path, error)
        } else {
            format!("  ○ {} \x1b[90mno image\x1b[0m", path)
        };

        report.push_str(&line);
        report.push('\n');
    }

    report
}
