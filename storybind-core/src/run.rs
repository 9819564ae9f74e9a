use crate::document::{DocumentError, StoryDocument};
use crate::naming;
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storybind_crawler::fetcher::DEFAULT_TIMEOUT_SECS;
use storybind_crawler::{
    CrawlError, Crawler, Fetcher, Locator, PageCallback, PageCapture, PageVisit,
    ProgressCallback, RegionSelector, SeedRule, SiteRef,
};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

/// Options for one bind run. Everything the CLI makes configurable
/// flows through here; the CLI is a thin layer over this struct.
pub struct RunOptions {
    pub base_url: Url,
    /// Known latest-post path; when absent the first link in the
    /// listing region is taken.
    pub latest_path: Option<String>,
    /// Output PDF path; when absent the name is derived from the seed.
    pub output: Option<PathBuf>,
    pub timeout_secs: u64,
    pub listing_region: String,
    pub main_region: String,
    /// Site-mounted-under-a-sub-path quirk, see `SiteRef`.
    pub root_strip: Option<String>,
    pub show_progress: bool,
}

impl RunOptions {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            latest_path: None,
            output: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            listing_region: "section#primary".to_string(),
            main_region: "main".to_string(),
            root_strip: None,
            show_progress: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Crawl failed: {0}")]
    Crawl(#[from] CrawlError),

    #[error("Document failed: {0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Internal(String),
}

/// Outcome of a run. `output` is `None` when no page produced an image
/// and therefore no file was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: String,
    pub started_at: DateTime<Local>,
    pub duration_ms: u64,
    pub pages_visited: usize,
    pub pages_saved: usize,
    pub output: Option<PathBuf>,
    pub visits: Vec<PageVisit>,
}

/// Locate the seed, walk the chain, bind the collected images into a
/// PDF. Locator failures and a failed final write are terminal;
/// per-page failures are recorded on the visit log and recovered.
pub async fn execute_run(options: RunOptions) -> Result<RunSummary, RunError> {
    let started_at = Local::now();
    let start = std::time::Instant::now();

    let fetcher = Fetcher::with_timeout(options.timeout_secs);
    let mut site = SiteRef::new(options.base_url.clone());
    if let Some(segment) = &options.root_strip {
        site = site.with_root_strip(segment.clone());
    }

    let listing_region = RegionSelector::parse(&options.listing_region)?;
    let main_region = RegionSelector::parse(&options.main_region)?;

    let mut locator = Locator::new(site.clone()).with_listing_region(listing_region);
    if let Some(path) = &options.latest_path {
        locator = locator.with_rule(SeedRule::KnownPath(path.clone()));
    }
    let seed = locator.locate(&fetcher).await?;

    let progress_bar = if options.show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Crawling from {}...", seed));
        Some(pb)
    } else {
        None
    };

    let progress_callback: ProgressCallback = if let Some(pb) = progress_bar.clone() {
        Arc::new(move |count: usize, url: String| {
            pb.set_message(format!("Page {}: {}", count, url));
        })
    } else {
        Arc::new(|_count: usize, _url: String| {})
    };

    // The document is owned by this run; the page callback appends to it
    // strictly in visit order since the crawl is sequential.
    let document = Arc::new(Mutex::new(StoryDocument::new(seed.as_str())));
    let appender = document.clone();
    let page_callback: PageCallback = Arc::new(move |capture: PageCapture| {
        if let Err(e) = stage_and_append(&appender, &capture) {
            warn!(
                "Skipping image {} from {}: {}",
                capture.image_url, capture.page_url, e
            );
        }
    });

    let crawler = Crawler::new(site, fetcher)
        .with_main_region(main_region)
        .with_page_callback(page_callback)
        .with_progress_callback(progress_callback);

    let visits = crawler.crawl(seed.clone()).await?;
    // Releases the page callback's handle on the document.
    drop(crawler);

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    let document = Arc::try_unwrap(document)
        .map_err(|_| RunError::Internal("document still shared after crawl".to_string()))?
        .into_inner()
        .map_err(|_| RunError::Internal("document lock poisoned".to_string()))?;

    let pages_saved = document.page_count();
    let output = if pages_saved > 0 {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(naming::derive_output_name(seed.as_str())));
        document.save(&path)?;
        info!("PDF saved as {}", path.display());
        Some(path)
    } else {
        info!("No images collected, nothing written");
        None
    };

    Ok(RunSummary {
        seed: seed.as_str().to_string(),
        started_at,
        duration_ms: start.elapsed().as_millis() as u64,
        pages_visited: visits.len(),
        pages_saved,
        output,
        visits,
    })
}

/// Stage the image bytes to a temporary file, then decode and append.
/// The staged file is removed on every path, success and failure alike,
/// when the handle drops.
fn stage_and_append(
    document: &Mutex<StoryDocument>,
    capture: &PageCapture,
) -> Result<(), DocumentError> {
    let mut staged = NamedTempFile::new()?;
    staged.write_all(&capture.bytes)?;
    staged.flush()?;

    document
        .lock()
        .expect("document lock poisoned")
        .add_image_page(staged.path())
}
