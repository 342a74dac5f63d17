//! Animator errors.

/// Errors returned by animator operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimatorError {
    #[error("Nothing to type: the source text is empty")]
    EmptyInput,

    #[error("Typing speed must be a positive number of milliseconds (got {0})")]
    InvalidSpeed(f64),
}
