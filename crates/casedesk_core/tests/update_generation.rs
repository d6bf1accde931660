use std::path::PathBuf;
use std::sync::Once;

use casedesk_core::{
    update, AppState, Effect, GenerateKind, GeneratedText, Msg, PickedFile, PDF_MIME,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(desk_logging::initialize_for_tests);
}

fn with_material(name: &str) -> AppState {
    let file = PickedFile {
        path: PathBuf::from("/library").join(name),
        name: name.to_owned(),
        size: 4096,
        modified: None,
        mime: PDF_MIME.to_owned(),
    };
    let (state, _effects) = update(AppState::new(), Msg::FilesPicked(vec![file]));
    state
}

fn finished(kind: GenerateKind, source: &str, outcome: Result<GeneratedText, String>) -> Msg {
    Msg::GenerationFinished {
        kind,
        source: source.to_owned(),
        outcome,
    }
}

#[test]
fn generate_without_selection_alerts_and_appends_nothing() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::GenerateRequested {
            kind: GenerateKind::Brief,
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert!(view.alert.is_some());
    assert!(view.briefs.is_empty());
    assert!(view.outlines.is_empty());
}

#[test]
fn generate_emits_effect_for_the_selected_material() {
    init_logging();
    let state = with_material("contracts.pdf");
    let (state, effects) = update(
        state,
        Msg::GenerateRequested {
            kind: GenerateKind::Outline,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Generate {
            kind: GenerateKind::Outline,
            path: PathBuf::from("/library/contracts.pdf"),
            name: "contracts.pdf".to_owned(),
        }]
    );
    assert_eq!(state.view().generating, 1);
}

#[test]
fn successful_brief_appends_only_to_briefs() {
    init_logging();
    let state = with_material("doc.pdf");
    let (state, _effects) = update(
        state,
        Msg::GenerateRequested {
            kind: GenerateKind::Brief,
        },
    );
    let (state, effects) = update(
        state,
        finished(
            GenerateKind::Brief,
            "doc.pdf",
            Ok(GeneratedText {
                title: "T".to_owned(),
                content: "C".to_owned(),
            }),
        ),
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.briefs.len(), 1);
    assert_eq!(view.briefs[0].title, "T");
    assert_eq!(view.briefs[0].provenance, "Linked to: doc.pdf");
    assert_eq!(view.briefs[0].body.as_deref(), Some("C"));
    assert!(view.outlines.is_empty());
    assert_eq!(view.generating, 0);
}

#[test]
fn failed_generation_alerts_and_leaves_lists_unchanged() {
    init_logging();
    let state = with_material("doc.pdf");
    let (state, _effects) = update(
        state,
        Msg::GenerateRequested {
            kind: GenerateKind::Brief,
        },
    );
    let (state, _effects) = update(
        state,
        finished(GenerateKind::Brief, "doc.pdf", Err("bad file".to_owned())),
    );
    let view = state.view();

    assert_eq!(view.alert.as_deref(), Some("bad file"));
    assert!(view.briefs.is_empty());
    assert!(view.outlines.is_empty());
    assert_eq!(view.generating, 0);
}

#[test]
fn overlapping_generations_append_in_resolution_order() {
    init_logging();
    let state = with_material("doc.pdf");
    let request = Msg::GenerateRequested {
        kind: GenerateKind::Brief,
    };
    let (state, _effects) = update(state, request.clone());
    let (state, _effects) = update(state, request);
    assert_eq!(state.view().generating, 2);

    // The second request resolves first; both still land, in that order.
    let (state, _effects) = update(
        state,
        finished(
            GenerateKind::Brief,
            "doc.pdf",
            Ok(GeneratedText {
                title: "second".to_owned(),
                content: String::new(),
            }),
        ),
    );
    let (state, _effects) = update(
        state,
        finished(
            GenerateKind::Brief,
            "doc.pdf",
            Ok(GeneratedText {
                title: "first".to_owned(),
                content: String::new(),
            }),
        ),
    );
    let view = state.view();

    assert_eq!(view.generating, 0);
    let titles: Vec<&str> = view.briefs.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[test]
fn alert_dismiss_clears_the_overlay() {
    init_logging();
    let state = AppState::new();
    let (mut state, _effects) = update(
        state,
        Msg::GenerateRequested {
            kind: GenerateKind::Outline,
        },
    );
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::AlertDismissed);

    assert!(effects.is_empty());
    assert!(state.view().alert.is_none());
    assert!(state.consume_dirty());
}
