use crate::error::{CrawlError, Result};
use crate::fetcher::Fetcher;
use crate::page::{PageDoc, RegionSelector};
use crate::site::SiteRef;
use tracing::info;
use url::Url;

/// How the seed link is picked out of the listing's primary region.
#[derive(Debug, Clone)]
pub enum SeedRule {
    /// First anchor found inside the region.
    FirstLink,
    /// Anchor whose href equals a known latest-post path.
    KnownPath(String),
}

/// Finds the URL of the first page to crawl: fetches the site's listing
/// page and picks a link out of its primary region.
pub struct Locator {
    site: SiteRef,
    listing_region: RegionSelector,
    rule: SeedRule,
}

impl Locator {
    pub fn new(site: SiteRef) -> Self {
        Self {
            site,
            listing_region: RegionSelector::parse("section#primary")
                .expect("default listing region selector is valid"),
            rule: SeedRule::FirstLink,
        }
    }

    pub fn with_listing_region(mut self, region: RegionSelector) -> Self {
        self.listing_region = region;
        self
    }

    pub fn with_rule(mut self, rule: SeedRule) -> Self {
        self.rule = rule;
        self
    }

    /// A fetch failure or a missing region/link aborts the whole run:
    /// without a seed there is nothing to crawl.
    pub async fn locate(&self, fetcher: &Fetcher) -> Result<Url> {
        let body = fetcher.fetch_text(self.site.base()).await?;
        let page = PageDoc::parse(&body);

        if !page.has_region(&self.listing_region) {
            return Err(CrawlError::SeedNotFound(format!(
                "listing page {} has no primary region",
                self.site.base()
            )));
        }

        let href = match &self.rule {
            SeedRule::FirstLink => page.first_link_in(&self.listing_region),
            SeedRule::KnownPath(path) => page.link_in_with_href(&self.listing_region, path),
        }
        .ok_or_else(|| {
            CrawlError::SeedNotFound(format!(
                "no matching link in the primary region of {}",
                self.site.base()
            ))
        })?;

        let seed = self.site.resolve(&href)?;
        info!("Located seed page {}", seed);
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_listing(server: &MockServer, body: &str) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string(body.to_string()),
            )
            .mount(server)
            .await;
    }

    fn site_for(server: &MockServer) -> SiteRef {
        SiteRef::new(Url::parse(&format!("{}/", server.uri())).unwrap())
    }

    #[tokio::test]
    async fn test_locate_first_link() {
        let server = MockServer::start().await;
        serve_listing(
            &server,
            r#"<section id="primary">
                 <a href="/post/42.html">latest</a>
                 <a href="/post/41.html">older</a>
               </section>"#,
        )
        .await;

        let seed = Locator::new(site_for(&server))
            .locate(&Fetcher::new())
            .await
            .unwrap();
        assert_eq!(seed.path(), "/post/42.html");
    }

    #[tokio::test]
    async fn test_locate_known_path() {
        let server = MockServer::start().await;
        serve_listing(
            &server,
            r#"<section id="primary">
                 <a href="/post/42.html">latest</a>
                 <a href="/post/41.html">older</a>
               </section>"#,
        )
        .await;

        let seed = Locator::new(site_for(&server))
            .with_rule(SeedRule::KnownPath("/post/41.html".to_string()))
            .locate(&Fetcher::new())
            .await
            .unwrap();
        assert_eq!(seed.path(), "/post/41.html");
    }

    #[tokio::test]
    async fn test_locate_missing_region_is_seed_not_found() {
        let server = MockServer::start().await;
        serve_listing(&server, "<body><a href='/post/42.html'>latest</a></body>").await;

        let err = Locator::new(site_for(&server))
            .locate(&Fetcher::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CrawlError::SeedNotFound(_)));
    }

    #[tokio::test]
    async fn test_locate_region_without_links_is_seed_not_found() {
        let server = MockServer::start().await;
        serve_listing(&server, r#"<section id="primary">no links here</section>"#).await;

        let err = Locator::new(site_for(&server))
            .locate(&Fetcher::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CrawlError::SeedNotFound(_)));
    }

    #[tokio::test]
    async fn test_locate_fetch_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = Locator::new(site_for(&server))
            .locate(&Fetcher::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CrawlError::Http(_)));
    }
}
