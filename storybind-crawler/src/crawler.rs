use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::page::{PageDoc, RegionSelector};
use crate::result::PageVisit;
use crate::site::SiteRef;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Visible text of the link that chains post pages together. Fixed for
/// the sites this tool targets, not configurable.
pub const NEXT_PAGE_LABEL: &str = "下一页";

/// One downloaded image, handed over in visit order. The crawler drops
/// the bytes as soon as the callback returns.
pub struct PageCapture {
    pub page_url: String,
    pub image_url: String,
    pub bytes: Vec<u8>,
}

pub type PageCallback = Arc<dyn Fn(PageCapture)>;
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Walks the "next page" chain from a seed URL, one page at a time,
/// downloading one image per page. All per-run state (the visited set,
/// the visit log) is local to a `crawl` call.
pub struct Crawler {
    fetcher: Fetcher,
    site: SiteRef,
    main_region: RegionSelector,
    page_callback: Option<PageCallback>,
    progress_callback: Option<ProgressCallback>,
}

impl Crawler {
    pub fn new(site: SiteRef, fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            site,
            main_region: RegionSelector::parse("main")
                .expect("default main region selector is valid"),
            page_callback: None,
            progress_callback: None,
        }
    }

    pub fn with_main_region(mut self, region: RegionSelector) -> Self {
        self.main_region = region;
        self
    }

    pub fn with_page_callback(mut self, callback: PageCallback) -> Self {
        self.page_callback = Some(callback);
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Follow the chain until the next link is absent or repeats a
    /// visited page. The visited set strictly grows each iteration, so
    /// the loop terminates on any chain, cyclic ones included.
    pub async fn crawl(&self, seed: Url) -> Result<Vec<PageVisit>> {
        info!("Starting crawl at {}", seed);

        let mut visited: HashSet<String> = HashSet::new();
        let mut visits: Vec<PageVisit> = Vec::new();
        let mut current = Some(seed);

        while let Some(url) = current.take() {
            if !visited.insert(url.as_str().to_string()) {
                debug!("Already visited {}, chain closed", url);
                break;
            }

            if let Some(callback) = &self.progress_callback {
                callback(visited.len(), url.as_str().to_string());
            }

            let mut visit = PageVisit::new(url.as_str().to_string());

            let body = match self.fetcher.fetch_text(&url).await {
                Ok(body) => body,
                Err(e) => {
                    // The next link lives on the page we could not fetch,
                    // so the chain ends here (skip-and-stop).
                    warn!("Failed to fetch page {}: {}", url, e);
                    visit.error = Some(e.to_string());
                    visits.push(visit);
                    break;
                }
            };

            // Parse, query, discard: the page content does not outlive
            // the extraction.
            let (image_href, next_href) = {
                let page = PageDoc::parse(&body);
                (
                    page.first_image_in(&self.main_region),
                    page.link_with_text(NEXT_PAGE_LABEL),
                )
            };

            if let Some(href) = image_href {
                self.save_image(&url, &href, &mut visit).await;
            } else {
                debug!("No image in the main region of {}", url);
            }

            if let Some(href) = next_href {
                match self.site.resolve(&href) {
                    Ok(next) => {
                        visit.next_url = Some(next.as_str().to_string());
                        current = Some(next);
                    }
                    Err(e) => {
                        warn!("Unresolvable next link on {}: {}", url, e);
                        visit.error = Some(e.to_string());
                    }
                }
            }

            visits.push(visit);
        }

        info!("Crawl complete, visited {} pages", visits.len());
        Ok(visits)
    }

    /// Download the page's image and hand it to the page callback. A
    /// failure is recorded on the visit and the crawl moves on.
    async fn save_image(&self, page_url: &Url, href: &str, visit: &mut PageVisit) {
        let image_url = match self.site.resolve(href) {
            Ok(image_url) => image_url,
            Err(e) => {
                warn!("Unresolvable image link on {}: {}", page_url, e);
                visit.error = Some(e.to_string());
                return;
            }
        };
        visit.image_url = Some(image_url.as_str().to_string());

        match self.fetcher.fetch_bytes(&image_url).await {
            Ok(bytes) => {
                visit.image_fetched = true;
                if let Some(callback) = &self.page_callback {
                    callback(PageCapture {
                        page_url: page_url.as_str().to_string(),
                        image_url: image_url.as_str().to_string(),
                        bytes,
                    });
                }
            }
            Err(e) => {
                warn!("Failed to download image {}: {}", image_url, e);
                visit.error = Some(format!("image download failed: {}", e));
            }
        }
    }
}
