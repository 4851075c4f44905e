use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;
