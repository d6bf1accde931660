//! Casedesk core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, GenerateKind, GeneratedItem, GeneratedText, ImportStats, Material, PickedFile,
    PDF_MIME,
};
pub use update::update;
pub use view_model::{AppViewModel, CardView, MaterialRowView, CARD_BODY_CHARS};
