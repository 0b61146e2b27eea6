//! Analyzer engine: repository fetching and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, GithubFetcher, RepoFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, Repository};
