use thiserror::Error;

/// Typed failures signaled by the song store.
///
/// The HTTP layer maps these onto status codes: `Validation` is a 400,
/// `NotFound` a 404 and `Storage` a 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Field '{field}' is required but was empty")]
    Validation { field: &'static str },

    #[error("Song with id '{id}' not found")]
    NotFound { id: String },

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}
