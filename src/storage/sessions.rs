use crate::dataset::models::Dataset;
use crate::dataset::DatasetError;
use crate::map::models::LatLng;
use crate::sessions::models::{Phase, Session};
use crate::sessions::{RestartError, SessionError};
use crate::storage::interface::{
    ISessionStorage, SessionGameFlowHandler, SessionOutcome, SessionRepo,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Sessions live here for the lifetime of the process. Mutations happen under
/// the write lock, so operations on one session never interleave.
#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, Session>>>,
}

impl HashMapSessionsStorage {
    async fn mutate<T>(
        &self,
        session_id: &str,
        operation: impl FnOnce(&mut Session) -> T,
    ) -> SessionOutcome<T> {
        let mut storage = self.storage.write().await;
        let session = storage.get_mut(session_id)?;
        let result = operation(session);
        Some((result, session.clone()))
    }
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn create(&self, dataset: Dataset) -> (String, Session) {
        let session_id = uuid::Uuid::new_v4().to_string();
        let session = Session::new(dataset);
        self.storage
            .write()
            .await
            .insert(session_id.clone(), session.clone());
        (session_id, session)
    }

    async fn get(&self, session_id: &str) -> Option<Session> {
        self.storage.read().await.get(session_id).cloned()
    }

    async fn remove(&self, session_id: &str) -> bool {
        self.storage.write().await.remove(session_id).is_some()
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }
}

impl SessionGameFlowHandler for HashMapSessionsStorage {
    async fn submit_guess(&self, session_id: &str, guess: LatLng) -> SessionOutcome<bool> {
        self.mutate(session_id, |session| session.submit_guess(guess))
            .await
    }

    async fn reveal(&self, session_id: &str) -> SessionOutcome<Result<(), SessionError>> {
        self.mutate(session_id, Session::reveal).await
    }

    async fn advance(&self, session_id: &str) -> SessionOutcome<Result<(), SessionError>> {
        self.mutate(session_id, Session::advance).await
    }

    async fn restart(
        &self,
        session_id: &str,
        next_dataset: impl FnOnce() -> Result<Dataset, DatasetError> + Send,
    ) -> SessionOutcome<Result<(), RestartError>> {
        self.mutate(session_id, |session| -> Result<(), RestartError> {
            if session.phase() != Phase::Finished {
                return Err(SessionError::NotFinished.into());
            }
            session.restart(next_dataset()?)?;
            Ok(())
        })
        .await
    }
}
