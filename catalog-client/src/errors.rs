/// Client-side error taxonomy.
///
/// `Validation` never reaches the network; `Api` carries the server's status
/// and message; `Http` is a transport-level failure (unreachable host,
/// timeout, malformed body).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
