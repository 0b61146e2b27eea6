use crate::{
    generate_series, ActivityEnv, AppState, Effect, Msg, SessionState, DEFAULT_FETCH_ERROR,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// `env` supplies the calendar date and the random draws for the synthetic
/// activity series; everything else is deterministic in (state, msg).
pub fn update(
    mut state: AppState,
    msg: Msg,
    env: &mut dyn ActivityEnv,
) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_identifier(text);
            Vec::new()
        }
        Msg::Submitted => {
            let identifier = state.identifier().trim().to_owned();
            if identifier.is_empty() {
                return (state, Vec::new());
            }
            // One outstanding fetch at a time: a submission while Loading is
            // ignored rather than queued or replaced.
            if state.session() == SessionState::Loading {
                return (state, Vec::new());
            }
            state.begin_loading();
            vec![Effect::FetchRepositories { identifier }]
        }
        Msg::FetchSucceeded(repositories) => {
            if state.session() == SessionState::Loading {
                let activity = generate_series(env);
                state.apply_success(repositories, activity);
            }
            Vec::new()
        }
        Msg::FetchFailed { message } => {
            if state.session() == SessionState::Loading {
                let message = if message.trim().is_empty() {
                    DEFAULT_FETCH_ERROR.to_owned()
                } else {
                    message
                };
                state.apply_failure(message);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
