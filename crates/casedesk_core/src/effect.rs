use std::path::PathBuf;

use crate::GenerateKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Stat the files named by the import input and report them back as
    /// `Msg::FilesPicked`.
    ScanFiles { input: String },
    /// Run one generation round-trip against the backend.
    Generate {
        kind: GenerateKind,
        path: PathBuf,
        name: String,
    },
}
