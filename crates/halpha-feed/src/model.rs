use serde::{Deserialize, Serialize};

/// Value the feed uses in place of a URL when a site has nothing to link to.
pub const NO_LINK: &str = "NONE";

/// Top-level document returned by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEnvelope {
    /// HTML fragment shown under the table.
    pub message: String,
    /// Reports in ascending age order, as delivered.
    #[serde(rename = "siteInfo")]
    pub site_info: Vec<SiteReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteReport {
    #[serde(rename = "siteCode")]
    pub site_code: String,
    #[serde(rename = "age")]
    pub age_seconds: u64,
    #[serde(rename = "imageLink")]
    pub image_link: String,
    #[serde(rename = "movieURL")]
    pub movie_url: String,
}

impl SiteReport {
    pub fn image_href(&self) -> Option<&str> {
        link_target(&self.image_link)
    }

    pub fn movie_href(&self) -> Option<&str> {
        link_target(&self.movie_url)
    }
}

/// Maps the `NONE` sentinel to `None`; any other value is a link target.
pub fn link_target(raw: &str) -> Option<&str> {
    if raw == NO_LINK {
        None
    } else {
        Some(raw)
    }
}
