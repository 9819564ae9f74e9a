use crate::error::{CrawlError, Result};
use scraper::{ElementRef, Html, Selector};

/// Compiled CSS selector naming a content region of a page, e.g.
/// `section#primary` for a listing or `main` for a post body.
#[derive(Debug, Clone)]
pub struct RegionSelector(Selector);

impl RegionSelector {
    pub fn parse(selector: &str) -> Result<Self> {
        Selector::parse(selector)
            .map(Self)
            .map_err(|e| CrawlError::InvalidSelector(format!("{}: {}", selector, e)))
    }
}

/// One parsed page. Lives only long enough to answer the queries the
/// locator and crawler need; parser types stay inside this module.
pub struct PageDoc {
    html: Html,
}

impl PageDoc {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    pub fn has_region(&self, region: &RegionSelector) -> bool {
        self.region(region).is_some()
    }

    /// First anchor href inside the region, no filter beyond being a link.
    pub fn first_link_in(&self, region: &RegionSelector) -> Option<String> {
        let link_selector = Selector::parse("a[href]").unwrap();
        self.region(region)?
            .select(&link_selector)
            .next()?
            .value()
            .attr("href")
            .map(str::to_string)
    }

    /// Anchor inside the region whose href equals a known target path.
    pub fn link_in_with_href(&self, region: &RegionSelector, target: &str) -> Option<String> {
        let link_selector = Selector::parse("a[href]").unwrap();
        self.region(region)?
            .select(&link_selector)
            .filter_map(|el| el.value().attr("href"))
            .find(|href| *href == target)
            .map(str::to_string)
    }

    /// First image source inside the region.
    pub fn first_image_in(&self, region: &RegionSelector) -> Option<String> {
        let image_selector = Selector::parse("img[src]").unwrap();
        self.region(region)?
            .select(&image_selector)
            .next()?
            .value()
            .attr("src")
            .map(str::to_string)
    }

    /// First anchor anywhere on the page whose visible text, trimmed,
    /// matches the label exactly.
    pub fn link_with_text(&self, label: &str) -> Option<String> {
        let link_selector = Selector::parse("a[href]").unwrap();
        self.html
            .select(&link_selector)
            .find(|el| el.text().collect::<String>().trim() == label)
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string)
    }

    fn region(&self, region: &RegionSelector) -> Option<ElementRef<'_>> {
        self.html.select(&region.0).next()
    }
}
