use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed body was empty")]
    Empty,

    #[error("feed body is not valid JSON (line {line}, column {column}): {source}")]
    Malformed {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("feed JSON does not match the expected envelope (line {line}, column {column}): {source}")]
    Shape {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for FeedError {
    fn from(source: serde_json::Error) -> Self {
        let (line, column) = (source.line(), source.column());
        if source.is_data() {
            FeedError::Shape {
                line,
                column,
                source,
            }
        } else {
            FeedError::Malformed {
                line,
                column,
                source,
            }
        }
    }
}
