use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(castprep_http::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Application-level failure embedded in a transport-level success.
    #[error("api error {status_code}: {status_msg}")]
    Api { status_code: i64, status_msg: String },

    #[error("invalid inline audio payload: {0}")]
    AudioPayload(#[from] hex::FromHexError),

    #[error("no audio in response")]
    NoAudio,

    #[error("upload response carries no file id")]
    MissingFileId,
}
