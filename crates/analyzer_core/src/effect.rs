#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRepositories { identifier: String },
}
