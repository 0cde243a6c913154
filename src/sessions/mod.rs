use crate::dataset::DatasetError;

pub mod consts;
pub mod handlers;
pub mod models;

/// An operation invoked while its guard doesn't hold. Session state is left
/// untouched when one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no guess has been placed for the current round")]
    NoPendingGuess,
    #[error("the current round is not accepting guesses")]
    NotGuessing,
    #[error("the current round has not been revealed")]
    NotRevealed,
    #[error("the session is not finished")]
    NotFinished,
}

/// Why a finished session could not be started over.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RestartError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to generate the next dataset: {0}")]
    Dataset(#[from] DatasetError),
}
