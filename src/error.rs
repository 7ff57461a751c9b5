/// All errors that can occur while configuring the sensors or decoding data.
///
/// Views themselves never fail: a missing record or field degrades to a
/// sentinel value instead.
#[derive(thiserror::Error, Debug)]
pub enum RbfaError {
    /// The config entry has no team id.
    #[error("config entry {entry_id} has no team id")]
    MissingTeam { entry_id: String },

    /// The dataset payload is not valid JSON or has the wrong shape.
    #[error("failed to decode dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// A match timestamp matched none of the accepted formats.
    #[error("failed to parse match time {value:?}: {source}")]
    DateParse {
        value: String,
        source: chrono::ParseError,
    },

    /// An upstream response lacks the field its operation must yield.
    #[error("response for {operation} is missing required field {field}")]
    MissingField {
        operation: String,
        field: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RbfaError>;
