use crate::{ActivityPoint, Repository, SessionState};

/// Read-only snapshot of the session handed to the presentation layer after
/// every transition. Repositories are untruncated; display limits belong to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub identifier: String,
    pub session: SessionState,
    pub repositories: Vec<Repository>,
    pub activity: Vec<ActivityPoint>,
    pub loading: bool,
    pub error: Option<String>,
    pub dirty: bool,
}
