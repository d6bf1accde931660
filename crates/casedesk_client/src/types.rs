use std::fmt;
use std::path::PathBuf;

/// Identifier assigned by the caller to one generation request.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateKind {
    Brief,
    Outline,
}

impl GenerateKind {
    /// Wire-format value of the `kind` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            GenerateKind::Brief => "brief",
            GenerateKind::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub request_id: RequestId,
    pub kind: GenerateKind,
    pub file_path: PathBuf,
    pub file_name: String,
}

/// Decoded success payload. The backend also echoes the requested kind;
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct GeneratedContent {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Completed {
        request_id: RequestId,
        kind: GenerateKind,
        file_name: String,
        result: Result<GeneratedContent, GenerateError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct GenerateError {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerateError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The material's file could not be read from disk; no request was sent.
    UnreadableFile,
    /// The backend could not be reached or the transport failed mid-flight.
    Network,
    /// The backend answered with a non-success status. `detail` carries the
    /// server-provided explanation when the failure body had one.
    Backend { status: u16, detail: Option<String> },
    /// A success status carried a body that does not match the schema.
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::UnreadableFile => write!(f, "unreadable file"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Backend { status, detail } => match detail {
                Some(detail) => write!(f, "backend error {status}: {detail}"),
                None => write!(f, "backend error {status}"),
            },
            FailureKind::InvalidResponse => write!(f, "invalid response body"),
        }
    }
}
