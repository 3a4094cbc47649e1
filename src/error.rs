/// All errors that can occur while rendering match cards.
#[derive(thiserror::Error, Debug)]
pub enum TourneyError {
    /// A field the card cannot be built without is empty or missing.
    #[error("invalid match data: missing {field} ({context})")]
    InvalidData {
        field: &'static str,
        context: String,
    },

    /// The match feed was not a JSON array.
    #[error("failed to parse match feed: {0}")]
    Json(#[from] serde_json::Error),

    /// One entry of the match feed did not match the model.
    #[error("feed entry #{index} is malformed: {source}")]
    MalformedEntry {
        index: usize,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TourneyError>;
