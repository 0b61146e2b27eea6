use std::sync::mpsc;
use std::thread;

use analyzer_core::{Effect, Msg, Repository};
use analyzer_engine::{EngineEvent, EngineHandle, FetchSettings};
use analyzer_logging::analyzer_info;

use super::app::AppEvent;

/// Runs core effects against the engine and forwards engine completions back
/// into the main loop as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (engine, engine_events) = EngineHandle::new(FetchSettings::default());
        spawn_event_loop(engine_events, event_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchRepositories { identifier } => {
                    analyzer_info!("FetchRepositories identifier={}", identifier);
                    self.engine.fetch(identifier);
                }
            }
        }
    }
}

fn spawn_event_loop(
    engine_events: mpsc::Receiver<EngineEvent>,
    event_tx: mpsc::Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(event) = engine_events.recv() {
            let msg = match event {
                EngineEvent::FetchCompleted { result } => match result {
                    Ok(repos) => Msg::FetchSucceeded(repos.into_iter().map(map_repo).collect()),
                    Err(err) => Msg::FetchFailed {
                        message: err.message,
                    },
                },
            };
            if event_tx.send(AppEvent::Core(msg)).is_err() {
                return;
            }
        }
    });
}

fn map_repo(repo: analyzer_engine::Repository) -> Repository {
    Repository {
        id: repo.id,
        name: repo.name,
        description: repo.description,
        url: repo.url,
        stars: repo.stars,
        forks: repo.forks,
        language: repo.language,
    }
}
