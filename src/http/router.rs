use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{health, http::cors, map, sessions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::session::create))
        .route(
            "/:session-id",
            get(sessions::handlers::session::state).delete(sessions::handlers::session::remove),
        )
        .route(
            "/:session-id/leaderboard",
            get(sessions::handlers::session::leaderboard),
        )
        .route(
            "/:session-id/guess",
            post(sessions::handlers::session::submit_guess),
        )
        .route(
            "/:session-id/reveal",
            post(sessions::handlers::session::reveal),
        )
        .route(
            "/:session-id/advance",
            post(sessions::handlers::session::advance),
        )
        .route(
            "/:session-id/restart",
            post(sessions::handlers::session::restart),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .route("/regions", get(map::handlers::regions))
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
