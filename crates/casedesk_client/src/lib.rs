//! Casedesk client: the generation round-trip against the local backend.
mod client;
mod generate;
mod types;

pub use client::ClientHandle;
pub use generate::{GenerateSettings, Generator, HttpGenerator, DEFAULT_ENDPOINT};
pub use types::{
    ClientEvent, FailureKind, GenerateError, GenerateKind, GenerateRequest, GeneratedContent,
    RequestId,
};
