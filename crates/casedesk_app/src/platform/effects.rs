use casedesk_client::{
    ClientEvent, ClientHandle, FailureKind, GenerateError, GenerateRequest, GenerateSettings,
    RequestId,
};
use casedesk_core::{Effect, GeneratedText, Msg};
use desk_logging::{desk_info, desk_warn};

use super::scan;

/// Executes effects produced by the core and feeds results back as messages.
///
/// File scanning resolves synchronously; generation goes through the client
/// handle and comes back later via [`EffectRunner::poll`].
pub struct EffectRunner {
    client: ClientHandle,
    next_request_id: RequestId,
}

impl EffectRunner {
    pub fn new(settings: GenerateSettings) -> Self {
        Self {
            client: ClientHandle::new(settings),
            next_request_id: 1,
        }
    }

    /// Runs the given effects; returns any messages that are ready now.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut msgs = Vec::new();
        for effect in effects {
            match effect {
                Effect::ScanFiles { input } => {
                    let files = scan::scan_input(&input);
                    desk_info!("import scan of {input:?} found {} candidate(s)", files.len());
                    msgs.push(Msg::FilesPicked(files));
                }
                Effect::Generate { kind, path, name } => {
                    let request_id = self.next_request_id;
                    self.next_request_id += 1;
                    desk_info!(
                        "generate #{request_id} kind={} file={:?}",
                        kind.label(),
                        path
                    );
                    self.client.generate(GenerateRequest {
                        request_id,
                        kind: map_kind(kind),
                        file_path: path,
                        file_name: name,
                    });
                }
            }
        }
        msgs
    }

    /// Drains completed generations into messages for the next dispatch.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.client.try_recv() {
            let ClientEvent::Completed {
                request_id,
                kind,
                file_name,
                result,
            } = event;
            let outcome = match result {
                Ok(content) => {
                    desk_info!("generate #{request_id} done: {}", content.title);
                    Ok(GeneratedText {
                        title: content.title,
                        content: content.content,
                    })
                }
                Err(err) => {
                    desk_warn!("generate #{request_id} failed: {err}");
                    Err(user_message(&err))
                }
            };
            msgs.push(Msg::GenerationFinished {
                kind: map_kind_back(kind),
                source: file_name,
                outcome,
            });
        }
        msgs
    }
}

fn map_kind(kind: casedesk_core::GenerateKind) -> casedesk_client::GenerateKind {
    match kind {
        casedesk_core::GenerateKind::Brief => casedesk_client::GenerateKind::Brief,
        casedesk_core::GenerateKind::Outline => casedesk_client::GenerateKind::Outline,
    }
}

fn map_kind_back(kind: casedesk_client::GenerateKind) -> casedesk_core::GenerateKind {
    match kind {
        casedesk_client::GenerateKind::Brief => casedesk_core::GenerateKind::Brief,
        casedesk_client::GenerateKind::Outline => casedesk_core::GenerateKind::Outline,
    }
}

/// Message shown in the alert overlay for each failure class.
fn user_message(err: &GenerateError) -> String {
    match &err.kind {
        FailureKind::UnreadableFile => "Selected material is missing its file.".to_owned(),
        FailureKind::Network => {
            "Could not reach backend service. Is it running on port 8001?".to_owned()
        }
        FailureKind::Backend {
            detail: Some(detail),
            ..
        } => detail.clone(),
        FailureKind::Backend { detail: None, .. } => "Error generating content.".to_owned(),
        FailureKind::InvalidResponse => "Backend returned an unexpected response.".to_owned(),
    }
}
