use crate::app_context::{AppContext, RequestContext};
use crate::map::models::LatLng;
use crate::sessions::handlers::responses::{
    CreateSessionResponse, LeaderboardEntry, LeaderboardResponse, RemoveSessionResponse,
    SessionResponseError, SessionStateResponse, SessionStateView, SubmitGuessResponse,
};
use crate::storage::interface::{ISessionStorage, SessionOutcome};
use std::fmt::Display;

pub struct SessionHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> SessionHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn state(&self) -> SessionStateResponse {
        match self
            .app_context
            .sessions
            .get(&self.request_context.session_id)
            .await
        {
            Some(session) => SessionStateResponse::ok(&session),
            None => SessionStateResponse::rejected(SessionResponseError::SessionNotFound, None),
        }
    }

    pub async fn leaderboard(&self) -> LeaderboardResponse {
        match self
            .app_context
            .sessions
            .get(&self.request_context.session_id)
            .await
        {
            Some(session) => LeaderboardResponse {
                error: false,
                error_code: None,
                phase: Some(session.phase()),
                entries: Some(LeaderboardEntry::ranked(&session)),
            },
            None => LeaderboardResponse {
                error: true,
                error_code: Some(SessionResponseError::SessionNotFound),
                phase: None,
                entries: None,
            },
        }
    }

    pub async fn submit_guess(&self, guess: LatLng) -> SubmitGuessResponse {
        if !guess.is_valid() {
            tracing::warn!(
                session_id = %self.request_context.session_id,
                lat = guess.lat,
                lng = guess.lng,
                "Rejecting a guess outside of the globe.",
            );
            return SubmitGuessResponse {
                error: true,
                error_code: Some(SessionResponseError::InvalidCoordinate),
                accepted: None,
                pending_guess: None,
            };
        }
        match self
            .app_context
            .sessions
            .submit_guess(&self.request_context.session_id, guess)
            .await
        {
            Some((accepted, session)) => SubmitGuessResponse {
                error: false,
                error_code: None,
                accepted: Some(accepted),
                pending_guess: session.pending_guess(),
            },
            None => SubmitGuessResponse {
                error: true,
                error_code: Some(SessionResponseError::SessionNotFound),
                accepted: None,
                pending_guess: None,
            },
        }
    }

    pub async fn reveal(&self) -> SessionStateResponse {
        let outcome = self
            .app_context
            .sessions
            .reveal(&self.request_context.session_id)
            .await;
        self.transition_response("reveal", outcome)
    }

    pub async fn advance(&self) -> SessionStateResponse {
        let outcome = self
            .app_context
            .sessions
            .advance(&self.request_context.session_id)
            .await;
        self.transition_response("advance", outcome)
    }

    pub async fn restart(&self) -> SessionStateResponse {
        let generator = &self.app_context.generator;
        let outcome = self
            .app_context
            .sessions
            .restart(&self.request_context.session_id, || generator.generate())
            .await;
        self.transition_response("restart", outcome)
    }

    pub async fn remove(&self) -> RemoveSessionResponse {
        if self
            .app_context
            .sessions
            .remove(&self.request_context.session_id)
            .await
        {
            tracing::info!(session_id = %self.request_context.session_id, "Removed a session.");
            RemoveSessionResponse {
                error: false,
                error_code: None,
            }
        } else {
            RemoveSessionResponse {
                error: true,
                error_code: Some(SessionResponseError::SessionNotFound),
            }
        }
    }

    fn transition_response<E>(
        &self,
        operation: &str,
        outcome: SessionOutcome<Result<(), E>>,
    ) -> SessionStateResponse
    where
        E: Into<SessionResponseError> + Display,
    {
        match outcome {
            Some((Ok(()), session)) => SessionStateResponse::ok(&session),
            Some((Err(error), session)) => {
                tracing::warn!(
                    session_id = %self.request_context.session_id,
                    operation,
                    "Rejected session operation: {error}.",
                );
                SessionStateResponse::rejected(error.into(), Some(&session))
            }
            None => SessionStateResponse::rejected(SessionResponseError::SessionNotFound, None),
        }
    }
}

pub struct CreateSessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateSessionHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreateSessionResponse {
        let dataset = match self.app_context.generator.generate() {
            Ok(dataset) => dataset,
            Err(error) => {
                tracing::error!("Failed to generate a dataset for a new session: {error}");
                return CreateSessionResponse {
                    error: true,
                    error_code: Some(SessionResponseError::MalformedDataset),
                    session_id: None,
                    state: None,
                };
            }
        };
        let (session_id, session) = self.app_context.sessions.create(dataset).await;
        tracing::info!(
            session_id = %session_id,
            rounds = session.total_rounds(),
            "Created a session.",
        );
        CreateSessionResponse {
            error: false,
            error_code: None,
            session_id: Some(session_id),
            state: Some(SessionStateView::from(&session)),
        }
    }
}
