// Error kinds surfaced by store operations

use thiserror::Error;

/// Errors from task store operations
///
/// Validation errors leave the collection unchanged. `Persistence` and
/// `CorruptState` are recoverable: the in-memory collection stays
/// authoritative and the caller decides what to display.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task text cannot be empty")]
    EmptyText,

    #[error("task text is too long: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("a task with this text already exists")]
    DuplicateText,

    #[error("task not found: {0}")]
    NotFound(String),

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("stored task data is corrupt: {0}")]
    CorruptState(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Persistence(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(StoreError::EmptyText.to_string(), "task text cannot be empty");
        assert_eq!(
            StoreError::TooLong { len: 201, max: 200 }.to_string(),
            "task text is too long: 201 chars (max 200)"
        );
        assert_eq!(
            StoreError::NotFound("abc".to_string()).to_string(),
            "task not found: abc"
        );
    }

    #[test]
    fn test_io_error_maps_to_persistence() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Persistence(_)));
    }
}
