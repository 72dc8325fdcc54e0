//! Per-file check results collected for the run summary.

/// Result of checking one output file.
#[derive(Debug, Clone)]
pub struct CheckEntry {
    /// File or item that was checked.
    pub name: String,
    /// Final status of the check.
    pub status: CheckStatus,
    /// Optional detail message (e.g., difference count or error).
    pub message: Option<String>,
}

/// Status of a completed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Output matched its gold copy.
    Ok,
    /// Output differed or could not be loaded.
    Failed,
}
