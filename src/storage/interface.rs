use crate::dataset::models::Dataset;
use crate::dataset::DatasetError;
use crate::map::models::LatLng;
use crate::sessions::models::Session;
use crate::sessions::{RestartError, SessionError};

/// Outcome of an operation on a stored session: `None` when there is no
/// session with the given id, otherwise the state-machine result together
/// with a snapshot of the session taken under the same lock.
pub type SessionOutcome<T> = Option<(T, Session)>;

pub trait ISessionStorage: SessionRepo + SessionGameFlowHandler {}

pub trait SessionRepo {
    async fn create(&self, dataset: Dataset) -> (String, Session);

    async fn get(&self, session_id: &str) -> Option<Session>;

    async fn remove(&self, session_id: &str) -> bool;

    async fn count(&self) -> usize;
}

pub trait SessionGameFlowHandler {
    async fn submit_guess(&self, session_id: &str, guess: LatLng) -> SessionOutcome<bool>;

    async fn reveal(&self, session_id: &str) -> SessionOutcome<Result<(), SessionError>>;

    async fn advance(&self, session_id: &str) -> SessionOutcome<Result<(), SessionError>>;

    /// `next_dataset` is only called once the session is finished.
    async fn restart(
        &self,
        session_id: &str,
        next_dataset: impl FnOnce() -> Result<Dataset, DatasetError> + Send,
    ) -> SessionOutcome<Result<(), RestartError>>;
}
