// crates/halpha-core/src/error.rs

use std::path::PathBuf;

use halpha_feed::FeedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed endpoint {url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("feed decoding failed: {0}")]
    Feed(#[from] FeedError),

    #[error("status icon missing: {}", .0.display())]
    MissingIcon(PathBuf),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
