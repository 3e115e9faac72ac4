use thiserror::Error;

/// A single HTTP GET that did not yield a usable body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
}

/// One marketplace could not be polled this run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{adapter}: {cause}")]
pub struct AdapterError {
    pub adapter: String,
    #[source]
    pub cause: FetchError,
}

impl AdapterError {
    pub fn new(adapter: impl Into<String>, cause: FetchError) -> Self {
        Self {
            adapter: adapter.into(),
            cause,
        }
    }
}

#[derive(Error, Debug)]
pub enum JetwatchError {
    #[error("Seen store error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client could not be built: {reason}")]
    HttpClient { reason: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl JetwatchError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            JetwatchError::InvalidConfigValue { .. } => ErrorSeverity::High,
            JetwatchError::Storage(_)
            | JetwatchError::Io(_)
            | JetwatchError::HttpClient { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            JetwatchError::Storage(_) => {
                "Could not read or update the seen-listings database".to_string()
            }
            JetwatchError::Io(e) => format!("Could not access the data directory: {}", e),
            JetwatchError::HttpClient { reason } => {
                format!("Could not set up the HTTP client: {}", reason)
            }
            JetwatchError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            JetwatchError::Storage(_) => {
                "Check that the database file is not locked or corrupted and the disk is writable"
            }
            JetwatchError::Io(_) => "Check permissions and free space for the data directory",
            JetwatchError::HttpClient { .. } => {
                "Check the system TLS setup and that --request-timeout-secs is sensible"
            }
            JetwatchError::InvalidConfigValue { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, JetwatchError>;
