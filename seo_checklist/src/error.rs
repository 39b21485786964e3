//! Error types for the checklist.

/// Error raised by a single check. The orchestrator turns it into an error verdict.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A third-party service answered with a non-success status.
    #[error("Error {status}: {body}")]
    Status {
        /// Status code returned.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },
    /// Missing required field in a response.
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    /// The capability backing the check is turned off.
    #[error("Not configured: {0}")]
    NotConfigured(&'static str),
}

/// Error raised while writing the spreadsheet.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The workbook could not be built or saved.
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for a check.
pub type CheckResult<T> = Result<T, CheckError>;
