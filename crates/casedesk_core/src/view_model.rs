use std::time::SystemTime;

use crate::{GeneratedItem, ImportStats};

/// Maximum card body length in characters; longer bodies are clipped and
/// marked with an ellipsis.
pub const CARD_BODY_CHARS: usize = 280;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub path_input: String,
    pub materials: Vec<MaterialRowView>,
    pub briefs: Vec<CardView>,
    pub outlines: Vec<CardView>,
    pub alert: Option<String>,
    pub last_import: Option<ImportStats>,
    pub generating: usize,
    pub dirty: bool,
}

impl AppViewModel {
    /// The row currently marked as selected, if any.
    pub fn selected_row(&self) -> Option<&MaterialRowView> {
        self.materials.iter().find(|row| row.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRowView {
    /// 1-based position shown in the list.
    pub position: usize,
    pub name: String,
    pub size: u64,
    pub modified: Option<SystemTime>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    /// "Linked to: <source>" or a fixed placeholder when unlinked.
    pub provenance: String,
    /// Clipped body text; `None` when the content is empty.
    pub body: Option<String>,
}

impl CardView {
    /// Projects a stored item into its displayable card.
    pub fn for_item(item: &GeneratedItem) -> Self {
        let provenance = match &item.source {
            Some(source) => format!("Linked to: {source}"),
            None => "Not yet linked to a PDF".to_owned(),
        };
        Self {
            title: item.title.clone(),
            provenance,
            body: clip_body(&item.content),
        }
    }
}

fn clip_body(content: &str) -> Option<String> {
    if content.is_empty() {
        return None;
    }
    let mut chars = content.chars();
    let clipped: String = chars.by_ref().take(CARD_BODY_CHARS).collect();
    if chars.next().is_some() {
        Some(format!("{clipped}…"))
    } else {
        Some(clipped)
    }
}
