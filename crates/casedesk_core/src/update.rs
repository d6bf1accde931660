use crate::{AppState, Effect, GeneratedItem, Msg};

/// Shown when generation is requested with nothing selected.
const NO_SELECTION_MESSAGE: &str = "Select a PDF under Materials first.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PathInputChanged(text) => {
            state.set_path_input(text);
            Vec::new()
        }
        Msg::ImportRequested => {
            let input = state.path_input().trim().to_owned();
            if input.is_empty() {
                Vec::new()
            } else {
                vec![Effect::ScanFiles { input }]
            }
        }
        Msg::FilesPicked(files) => {
            state.import_files(files);
            Vec::new()
        }
        Msg::MaterialSelected { index } => {
            state.select(index);
            Vec::new()
        }
        Msg::GenerateRequested { kind } => {
            let target = state
                .selected_material()
                .map(|material| (material.path.clone(), material.name.clone()));
            match target {
                Some((path, name)) => {
                    state.begin_generation();
                    vec![Effect::Generate { kind, path, name }]
                }
                None => {
                    state.set_alert(NO_SELECTION_MESSAGE);
                    Vec::new()
                }
            }
        }
        Msg::GenerationFinished {
            kind,
            source,
            outcome,
        } => {
            state.finish_generation();
            match outcome {
                Ok(text) => state.push_generated(
                    kind,
                    GeneratedItem {
                        title: text.title,
                        source: Some(source),
                        content: text.content,
                    },
                ),
                Err(message) => state.set_alert(message),
            }
            Vec::new()
        }
        Msg::AlertDismissed => {
            state.dismiss_alert();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
