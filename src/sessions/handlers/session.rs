use crate::app_context::{AppContext, RequestContext};
use crate::map::models::LatLng;
use crate::sessions::handlers::http::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::sessions::handlers::responses::{
    CreateSessionResponse, LeaderboardResponse, RemoveSessionResponse, SessionStateResponse,
    SubmitGuessResponse,
};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<CreateSessionResponse> {
    let response = CreateSessionHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn state(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionStateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .state()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn leaderboard(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<LeaderboardResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .leaderboard()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit_guess(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(guess): Json<LatLng>,
) -> Json<SubmitGuessResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .submit_guess(guess)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn reveal(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionStateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .reveal()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn advance(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionStateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .advance()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn restart(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionStateResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .restart()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn remove(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<RemoveSessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .remove()
        .await;
    Json(response)
}
