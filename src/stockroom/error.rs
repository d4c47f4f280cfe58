use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    ItemNotFound(u64),

    #[error("Item {0} has no photo")]
    NoPhoto(u64),

    #[error("Photo not found on disk: {0}")]
    PhotoMissing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification used by transports to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Disk,
    StoreUnavailable,
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        InventoryError::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::Validation(_) => ErrorKind::Validation,
            InventoryError::ItemNotFound(_)
            | InventoryError::NoPhoto(_)
            | InventoryError::PhotoMissing(_) => ErrorKind::NotFound,
            InventoryError::Io(_) => ErrorKind::Disk,
            InventoryError::Serialization(_) | InventoryError::Store(_) => {
                ErrorKind::StoreUnavailable
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_missing_things_as_not_found() {
        assert_eq!(InventoryError::ItemNotFound(3).kind(), ErrorKind::NotFound);
        assert_eq!(InventoryError::NoPhoto(3).kind(), ErrorKind::NotFound);
        assert_eq!(
            InventoryError::PhotoMissing("a.png".into()).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn corrupt_document_is_store_unavailable() {
        let err: InventoryError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
    }
}
