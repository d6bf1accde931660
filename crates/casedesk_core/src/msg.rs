use crate::{GenerateKind, GeneratedText, PickedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the import path input.
    PathInputChanged(String),
    /// User triggered an import of the files named by the path input.
    ImportRequested,
    /// Platform scanner reported the candidate files under the input path.
    FilesPicked(Vec<PickedFile>),
    /// User clicked a row in the materials list.
    MaterialSelected { index: usize },
    /// User asked for a brief or an outline of the selected material.
    GenerateRequested { kind: GenerateKind },
    /// A generation round-trip finished; `source` names the originating
    /// material and `outcome` carries the result or a user-facing message.
    GenerationFinished {
        kind: GenerateKind,
        source: String,
        outcome: Result<GeneratedText, String>,
    },
    /// User dismissed the alert overlay.
    AlertDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
