use uuid::Uuid;

/// Rejection reasons for a prospective dependency edge.
///
/// These are surfaced to the caller before anything is written; the read-side
/// analytics in this crate never return errors — degenerate input resolves to
/// zeros or empty series instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DependencyError {
    #[error("a task cannot depend on itself")]
    SelfReference,

    #[error("task {0} does not belong to this project")]
    UnknownTask(Uuid),

    #[error("linking these tasks would close a dependency cycle")]
    WouldCycle,
}

/// Failures raised by the import/export glue.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("file error: {0}")]
    File(#[from] std::io::Error),

    #[error("invalid workspace JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required columns (need task name, start date, end date); found headers {found:?}")]
    MissingColumns { found: Vec<String> },

    #[error("CSV file has no usable data rows ({skipped} rows skipped)")]
    EmptyImport { skipped: usize },
}
