use crate::error::{CrawlError, Result};
use url::Url;

/// The site a crawl runs against. Immutable for the duration of a run;
/// every link discovered during the crawl is resolved through it.
///
/// `root_strip` covers sites mounted under a sub-path: when set, links
/// starting with `/` are joined to the base URL with everything from the
/// configured segment onwards removed, instead of to the plain origin.
/// The original gushi365 mirror needs `root_strip = "/shuiqiangushi"`.
#[derive(Debug, Clone)]
pub struct SiteRef {
    base: Url,
    root_strip: Option<String>,
}

impl SiteRef {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            root_strip: None,
        }
    }

    pub fn with_root_strip(mut self, segment: impl Into<String>) -> Self {
        self.root_strip = Some(segment.into());
        self
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve a possibly-relative href into an absolute page reference.
    /// Pure: the same href always resolves to the same URL.
    pub fn resolve(&self, href: &str) -> Result<Url> {
        if href.starts_with("http://") || href.starts_with("https://") {
            return Url::parse(href)
                .map_err(|e| CrawlError::InvalidUrl(format!("{}: {}", href, e)));
        }

        if href.starts_with('/')
            && let Some(segment) = &self.root_strip
            && let Some(at) = self.base.as_str().find(segment.as_str())
        {
            let root = &self.base.as_str()[..at];
            return Url::parse(&format!("{}{}", root, href))
                .map_err(|e| CrawlError::InvalidUrl(format!("{}: {}", href, e)));
        }

        // RFC 3986 join: root-relative hrefs land on the origin, other
        // relative hrefs resolve against the base path.
        self.base
            .join(href)
            .map_err(|e| CrawlError::InvalidUrl(format!("{}: {}", href, e)))
    }
}
