//! Database error types.

/// Database error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatabaseErrorKind {
    /// Connection or pool checkout failed
    Connection(String),
    /// Query execution failed
    Query(String),
    /// A stored value could not be decoded
    Serialization(String),
    /// Migration error
    Migration(String),
    /// Blocking task panicked or was cancelled
    Task(String),
}

impl std::fmt::Display for DatabaseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseErrorKind::Connection(msg) => write!(f, "Database connection error: {}", msg),
            DatabaseErrorKind::Query(msg) => write!(f, "Database query error: {}", msg),
            DatabaseErrorKind::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            DatabaseErrorKind::Migration(msg) => write!(f, "Migration error: {}", msg),
            DatabaseErrorKind::Task(msg) => write!(f, "Database task failed: {}", msg),
        }
    }
}

/// Database error with source location tracking.
///
/// # Examples
///
/// ```
/// use osulink_error::{DatabaseError, DatabaseErrorKind};
///
/// let err = DatabaseError::new(DatabaseErrorKind::Query("locked".to_string()));
/// assert!(format!("{}", err).contains("locked"));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseError {
    /// The kind of error that occurred
    pub kind: DatabaseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DatabaseError {
    /// Create a new DatabaseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DatabaseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Database Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for DatabaseError {}

/// Result type for link store operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(feature = "database")]
impl From<diesel::result::Error> for DatabaseError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        DatabaseError::new(DatabaseErrorKind::Query(err.to_string()))
    }
}

#[cfg(feature = "database")]
impl From<diesel::ConnectionError> for DatabaseError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        DatabaseError::new(DatabaseErrorKind::Connection(err.to_string()))
    }
}
