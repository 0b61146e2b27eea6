use crate::view_model::AppViewModel;
use crate::ActivityPoint;

/// Shown when a fetch failure carries no usable description.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch GitHub data";

/// A single project record returned by the listing endpoint. Immutable once
/// received; the whole list is replaced on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
}

/// Phase of the current submission cycle. `Success` and `Failed` are
/// transient display states; the next submission re-enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// The complete mutable snapshot describing the current interaction.
///
/// Only the update function mutates this, always through one of the
/// transition helpers below, so no partial writes are observable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    identifier: String,
    repositories: Vec<Repository>,
    activity: Vec<ActivityPoint>,
    session: SessionState,
    error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            identifier: self.identifier.clone(),
            session: self.session,
            repositories: self.repositories.clone(),
            activity: self.activity.clone(),
            loading: self.session == SessionState::Loading,
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it; the renderer calls this to
    /// coalesce redraws.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_identifier(&mut self, text: String) {
        if self.identifier != text {
            self.identifier = text;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_loading(&mut self) {
        self.repositories.clear();
        self.activity.clear();
        self.error = None;
        self.session = SessionState::Loading;
        self.dirty = true;
    }

    pub(crate) fn apply_success(
        &mut self,
        repositories: Vec<Repository>,
        activity: Vec<ActivityPoint>,
    ) {
        self.repositories = repositories;
        self.activity = activity;
        self.session = SessionState::Success;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
        self.session = SessionState::Failed;
        self.dirty = true;
    }
}
