//! Configuration store error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the directory holding the store file
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read the store file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Failed to write or replace the store file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Store file exists but does not hold a valid guild mapping
    #[display("Malformed store file: {}", _0)]
    Malformed(String),
    /// In-memory store could not be serialized
    #[display("Failed to serialize store: {}", _0)]
    Serialize(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use alterra_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Malformed("expected object".to_string()));
/// assert!(format!("{}", err).contains("Malformed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
