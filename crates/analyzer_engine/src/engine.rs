use std::sync::{mpsc, Arc};
use std::thread;

use analyzer_logging::analyzer_warn;

use crate::fetch::{FetchSettings, GithubFetcher, RepoFetcher};
use crate::EngineEvent;

enum EngineCommand {
    Fetch { identifier: String },
}

/// Handle to the background fetch thread. Commands go in over a channel;
/// completions come back on the [`EngineEvent`] receiver returned by
/// [`EngineHandle::new`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(GithubFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn fetch(&self, identifier: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            identifier: identifier.into(),
        });
    }
}

async fn handle_command(
    fetcher: &dyn RepoFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { identifier } => {
            let result = fetcher.fetch_repositories(&identifier).await;
            if let Err(err) = &result {
                analyzer_warn!(
                    "fetch failed identifier={} kind={}: {}",
                    identifier,
                    err.kind,
                    err.message
                );
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { result });
        }
    }
}
