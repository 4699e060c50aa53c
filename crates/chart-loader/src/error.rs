// File: crates/chart-loader/src/error.rs
// Summary: Loader error type.

use cyclist_chart_core::DataError;

/// Why a fetch produced no dataset.
///
/// `Server` and `Connection` are the recognised boundary failures: the run ends without a
/// chart. `Parse` and `Data` mean the payload itself is broken, and `Aborted` means the
/// transfer never finished; all three are fatal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The server answered with a status outside `[200, 400)`.
    #[error("the server returned an error (HTTP {status})")]
    Server { status: u32 },
    /// No response at all (DNS, refused connection, TLS, ...).
    #[error("there was a connection error: {0}")]
    Connection(String),
    /// Body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// JSON is valid but does not describe a list of records.
    #[error("dataset is malformed: {0}")]
    Data(#[from] DataError),
    /// The transfer task was cancelled before it finished.
    #[error("transfer did not complete: {0}")]
    Aborted(String),
}

impl LoadError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, LoadError::Parse(_) | LoadError::Data(_) | LoadError::Aborted(_))
    }
}

impl From<curl::Error> for LoadError {
    fn from(e: curl::Error) -> Self {
        LoadError::Connection(e.to_string())
    }
}
