use crate::errors::FeedError;
use crate::model::FeedEnvelope;

pub fn parse_feed(body: &str) -> Result<FeedEnvelope, FeedError> {
    parse_feed_slice(body.as_bytes())
}

pub fn parse_feed_slice(body: &[u8]) -> Result<FeedEnvelope, FeedError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FeedError::Empty);
    }

    Ok(serde_json::from_slice(body)?)
}
