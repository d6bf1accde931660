use std::path::PathBuf;
use std::time::SystemTime;

use crate::view_model::{AppViewModel, CardView, MaterialRowView};

/// MIME type a picked file must carry to become a material.
pub const PDF_MIME: &str = "application/pdf";

/// One imported PDF tracked for generation requests.
///
/// The path is owned by the state store from import until process exit;
/// there is no delete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// A candidate file reported by the platform scanner, not yet filtered by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub modified: Option<SystemTime>,
    pub mime: String,
}

/// Counts for the most recent import action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportStats {
    pub imported: usize,
    pub skipped: usize,
}

/// The two supported generated-content kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateKind {
    Brief,
    Outline,
}

impl GenerateKind {
    /// Wire-format name of the kind, as the backend expects it.
    pub fn label(self) -> &'static str {
        match self {
            GenerateKind::Brief => "brief",
            GenerateKind::Outline => "outline",
        }
    }
}

/// Title and body returned by a successful generation round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub title: String,
    pub content: String,
}

/// A brief or outline stored in its result list. Append-only, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedItem {
    pub title: String,
    pub source: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    path_input: String,
    materials: Vec<Material>,
    selected: Option<usize>,
    briefs: Vec<GeneratedItem>,
    outlines: Vec<GeneratedItem>,
    alert: Option<String>,
    last_import: Option<ImportStats>,
    generating: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure projection of the current state into displayable rows and cards.
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            path_input: self.path_input.clone(),
            materials: self
                .materials
                .iter()
                .enumerate()
                .map(|(index, material)| MaterialRowView {
                    position: index + 1,
                    name: material.name.clone(),
                    size: material.size,
                    modified: material.modified,
                    selected: self.selected == Some(index),
                })
                .collect(),
            briefs: self.briefs.iter().map(CardView::for_item).collect(),
            outlines: self.outlines.iter().map(CardView::for_item).collect(),
            alert: self.alert.clone(),
            last_import: self.last_import,
            generating: self.generating,
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn path_input(&self) -> &str {
        &self.path_input
    }

    pub(crate) fn set_path_input(&mut self, text: String) {
        self.path_input = text;
        self.mark_dirty();
    }

    /// Appends every picked file whose MIME type is exactly [`PDF_MIME`];
    /// the rest are dropped without an error. Auto-selects index 0 the first
    /// time the library becomes non-empty while nothing is selected.
    pub(crate) fn import_files(&mut self, files: Vec<PickedFile>) {
        let mut stats = ImportStats::default();
        for file in files {
            if file.mime == PDF_MIME {
                self.materials.push(Material {
                    path: file.path,
                    name: file.name,
                    size: file.size,
                    modified: file.modified,
                });
                stats.imported += 1;
            } else {
                stats.skipped += 1;
            }
        }
        if self.selected.is_none() && !self.materials.is_empty() {
            self.selected = Some(0);
        }
        self.last_import = Some(stats);
        // Imports re-render even when nothing was appended; the projection
        // is idempotent so this is harmless.
        self.mark_dirty();
    }

    /// Sets the selection when the index is in bounds; out-of-range indices
    /// are ignored. Selection never auto-clears.
    pub(crate) fn select(&mut self, index: usize) {
        if index < self.materials.len() {
            self.selected = Some(index);
            self.mark_dirty();
        }
    }

    pub(crate) fn selected_material(&self) -> Option<&Material> {
        self.selected.and_then(|index| self.materials.get(index))
    }

    pub(crate) fn push_generated(&mut self, kind: GenerateKind, item: GeneratedItem) {
        match kind {
            GenerateKind::Brief => self.briefs.push(item),
            GenerateKind::Outline => self.outlines.push(item),
        }
        self.mark_dirty();
    }

    pub(crate) fn set_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
        self.mark_dirty();
    }

    pub(crate) fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_generation(&mut self) {
        self.generating += 1;
        self.mark_dirty();
    }

    pub(crate) fn finish_generation(&mut self) {
        self.generating = self.generating.saturating_sub(1);
        self.mark_dirty();
    }
}
