use std::sync::{mpsc, Arc};
use std::thread;

use desk_logging::desk_debug;

use crate::generate::{GenerateSettings, Generator, HttpGenerator};
use crate::{ClientEvent, GenerateRequest};

enum ClientCommand {
    Generate(GenerateRequest),
}

/// Bridges the synchronous UI thread to the async generator: commands go in
/// over one channel, completion events come back over another. A dedicated
/// thread owns the tokio runtime.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: GenerateSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let generator = Arc::new(HttpGenerator::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let generator = generator.clone();
                let event_tx = event_tx.clone();
                // One task per request: overlapping generations run
                // concurrently and complete in resolution order.
                runtime.spawn(async move {
                    handle_command(generator.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn generate(&self, request: GenerateRequest) {
        let _ = self.cmd_tx.send(ClientCommand::Generate(request));
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    generator: &dyn Generator,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Generate(request) => {
            desk_debug!(
                "generate request_id={} kind={} file={:?}",
                request.request_id,
                request.kind.as_str(),
                request.file_path
            );
            let result = generator.generate(&request).await;
            let _ = event_tx.send(ClientEvent::Completed {
                request_id: request.request_id,
                kind: request.kind,
                file_name: request.file_name,
                result,
            });
        }
    }
}
