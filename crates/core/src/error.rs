use thiserror::Error;

/// Why a quiz submission or selection was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRejection {
    #[error("no option selected")]
    NoSelection,
    #[error("question already answered")]
    AlreadyAnswered,
}

/// Recoverable conditions raised by study sessions.
///
/// None of these are fatal: the session refuses the mutation and its state is
/// left exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session has no items")]
    EmptySession,

    #[error("index {index} is out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },

    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] TransitionRejection),
}
