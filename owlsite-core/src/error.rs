use thiserror::Error;

/// Failure to obtain one of the two documents the page needs before rendering.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("JSON parsing error in {resource}: {source}")]
    Json {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Network error fetching {resource}: {message}")]
    Fetch { resource: String, message: String },
    #[error("Unexpected HTTP status {status} for {resource}")]
    Status { resource: String, status: u16 },
}

impl LoadError {
    pub fn json(resource: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            resource: resource.into(),
            source,
        }
    }

    pub fn fetch(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            resource: resource.into(),
            message: message.into(),
        }
    }
}
