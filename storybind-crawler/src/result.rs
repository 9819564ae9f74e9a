use serde::{Deserialize, Serialize};

/// Record of one page visited during a crawl, in visit order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageVisit {
    pub url: String,
    pub image_url: Option<String>,
    pub next_url: Option<String>,
    pub image_fetched: bool,
    pub error: Option<String>,
}

impl PageVisit {
    pub fn new(url: String) -> Self {
        Self {
            url,
            image_url: None,
            next_url: None,
            image_fetched: false,
            error: None,
        }
    }
}
