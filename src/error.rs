//! Error types and handling for chowmap.

/// Result type alias for chowmap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for chowmap operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed input line; aborts the whole parse run
    #[error("Parse error: {message}")]
    Parse {
        /// Error message quoting the offending line
        message: String,
    },

    /// Setup failure: missing input file, missing or malformed credentials
    #[error("Setup error: {message}")]
    Setup {
        /// Error message with remediation instructions
        message: String,
    },

    /// Places search failure (transport error or non-2xx response)
    #[error("Search error: {message}")]
    Search {
        /// Error message
        message: String,
    },

    /// CSV read/write errors
    #[error("CSV error: {source}")]
    Csv {
        /// Source error
        #[from]
        source: csv::Error,
    },

    /// I/O errors
    #[error("I/O error: {source}")]
    Io {
        /// Source error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new setup error
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup {
            message: message.into(),
        }
    }

    /// Create a new search error
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search {
            message: message.into(),
        }
    }
}
