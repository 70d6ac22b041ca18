use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LogError {
    /// The host asked for more turns than the recording holds.
    #[error("decision log exhausted after {consumed} decisions")]
    Exhausted { consumed: usize },
}
