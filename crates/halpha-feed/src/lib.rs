pub mod errors;
pub mod model;
mod decode;

pub use decode::{parse_feed, parse_feed_slice};
pub use errors::FeedError;
pub use model::{link_target, FeedEnvelope, SiteReport, NO_LINK};
