//! Analyzer core: pure session state machine and view-model helpers.
mod activity;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use activity::{
    generate_series, ActivityEnv, ActivityPoint, SystemEnv, MAX_DAILY_COMMITS, SERIES_LEN,
};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Repository, SessionState, DEFAULT_FETCH_ERROR};
pub use update::update;
pub use view_model::AppViewModel;
