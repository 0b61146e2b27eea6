#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the identifier input box.
    InputChanged(String),
    /// User submitted the current identifier for analysis.
    Submitted,
    /// Engine completed a fetch with an ordered repository list.
    FetchSucceeded(Vec<crate::Repository>),
    /// Engine completed a fetch with a failure description.
    FetchFailed { message: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
