use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not open the file '{path}'. Please check the file path and try again.")]
    OpenFailure { path: String },

    /// The file opened but reading it failed part way; lines before the
    /// failure are already merged and their warnings kept here.
    #[error("Could not read the file '{path}'. Please check the file path and try again.")]
    ReadFailure {
        path: String,
        warnings: Vec<LoadWarning>,
    },

    #[error("Could not open the file '{path}' for writing.")]
    OpenForWriteFailure { path: String },

    #[error("Could not verify the saved data in '{path}'. The file may be corrupted or inaccessible.")]
    VerificationFailure { path: String },

    #[error("Course {0} already exists.")]
    DuplicateCourse(String),

    #[error("Course number cannot be empty.")]
    EmptyCourseNumber,

    #[error("Course '{0}' not found.")]
    CourseNotFound(String),

    #[error("Invalid choice. Please select a valid option.")]
    InvalidMenuChoice(i64),

    #[error("Invalid input. Please enter a number.")]
    NonNumericInput,

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Non-fatal conditions met while loading a catalog file. Each one skips a
/// single line; loading continues with the next.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    #[error("Skipping malformed line: {line} (Expected at least 2 tokens)")]
    MalformedLine { line: String, tokens: usize },

    #[error("Skipping line: {line} (Course number cannot be empty.)")]
    EmptyCourseNumber { line: String },

    #[error("Course {0} is already loaded.")]
    DuplicateCourse(String),
}

impl CatalogError {
    /// File-operation failures are reported and the session carries on.
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            CatalogError::OpenFailure { .. }
                | CatalogError::ReadFailure { .. }
                | CatalogError::OpenForWriteFailure { .. }
                | CatalogError::VerificationFailure { .. }
                | CatalogError::IoError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
