use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use analyzer_core::{update, AppState, Msg, SystemEnv};
use analyzer_logging::analyzer_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

/// Everything the main loop reacts to: core messages from the input reader
/// and the engine, plus end-of-input.
pub enum AppEvent {
    Core(Msg),
    InputClosed,
}

pub fn run_app() {
    logging::initialize(LogDestination::File);
    analyzer_info!("analyzer_app starting");

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(event_tx.clone());
    spawn_input_reader(event_tx);

    let mut state = AppState::new();
    let mut env = SystemEnv;

    ui::render::print_welcome();

    while let Ok(event) = event_rx.recv() {
        let msg = match event {
            AppEvent::Core(msg) => msg,
            AppEvent::InputClosed => break,
        };
        let (next, effects) = update(state, msg, &mut env);
        state = next;
        runner.enqueue(effects);
        if state.consume_dirty() {
            ui::render::render(&state.view());
        }
    }

    analyzer_info!("analyzer_app exiting");
}

/// Each stdin line is treated as one identifier submission.
fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Core(Msg::InputChanged(line))).is_err() {
                return;
            }
            if event_tx.send(AppEvent::Core(Msg::Submitted)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
