pub mod crawler;
pub mod error;
pub mod fetcher;
pub mod locator;
pub mod page;
pub mod result;
pub mod site;

pub use crawler::{Crawler, PageCallback, PageCapture, ProgressCallback};
pub use error::CrawlError;
pub use fetcher::Fetcher;
pub use locator::{Locator, SeedRule};
pub use page::{PageDoc, RegionSelector};
pub use result::PageVisit;
pub use site::SiteRef;
