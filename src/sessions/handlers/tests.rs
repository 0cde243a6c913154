use crate::dataset::default_predictors;
use crate::dataset::generator::DatasetGenerator;
use crate::http::tests::test_server;
use crate::map::default_regions;
use crate::map::distance_km;
use crate::map::models::LatLng;
use crate::sessions::handlers::responses::{
    CreateSessionResponse, LeaderboardResponse, RemoveSessionResponse, SessionResponseError,
    SessionStateResponse, SubmitGuessResponse,
};
use crate::sessions::models::{EntrantKind, Phase};
use axum_test::TestServer;

const GUESS: LatLng = LatLng {
    lat: 39.0,
    lng: -100.0,
};

async fn create_session(server: &TestServer) -> (String, CreateSessionResponse) {
    let response = server.post("/sessions").await;
    response.assert_status_ok();
    let body: CreateSessionResponse = response.json();
    let session_id = body.session_id.clone().expect("No session id.");
    (session_id, body)
}

async fn post_state(server: &TestServer, path: String) -> SessionStateResponse {
    let response = server.post(&path).await;
    response.assert_status_ok();
    response.json()
}

async fn guess(server: &TestServer, session_id: &str, guess: LatLng) -> SubmitGuessResponse {
    let response = server
        .post(&format!("/sessions/{session_id}/guess"))
        .json(&guess)
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_create_session_hides_the_answer() {
    let server = test_server();

    let (_, body) = create_session(&server).await;

    assert!(!body.error);
    let state = body.state.expect("No state.");
    assert_eq!(state.phase, Phase::Guessing);
    assert_eq!(state.round_index, 0);
    assert_eq!(state.total_rounds, 3);
    assert_eq!(state.pending_guess, None);
    assert!(state.round.truth.is_none());
    assert!(state.round.location_label.is_none());
    assert!(state.round.predictions.is_none());
    assert_eq!(state.scores.len(), 5);
    assert_eq!(state.scores[0].kind, EntrantKind::Human);
}

#[tokio::test]
async fn test_reveal_without_guess_is_rejected() {
    let server = test_server();
    let (session_id, _) = create_session(&server).await;

    let body = post_state(&server, format!("/sessions/{session_id}/reveal")).await;

    assert!(body.error);
    assert_eq!(body.error_code, Some(SessionResponseError::NoPendingGuess));
    assert_eq!(body.state.map(|state| state.phase), Some(Phase::Guessing));
}

#[tokio::test]
async fn test_guess_then_reveal_scores_the_human() {
    let server = test_server();
    let (session_id, _) = create_session(&server).await;

    let body = guess(&server, &session_id, GUESS).await;
    assert_eq!(body.accepted, Some(true));
    assert_eq!(body.pending_guess, Some(GUESS));

    let body = post_state(&server, format!("/sessions/{session_id}/reveal")).await;
    assert!(!body.error);
    let state = body.state.expect("No state.");
    assert_eq!(state.phase, Phase::Revealed);
    let truth = state.round.truth.expect("Truth not revealed.");
    assert!(state.round.location_label.is_some());
    let predictions = state.round.predictions.expect("Predictions not revealed.");
    for entry in state.scores.iter() {
        let expected = match entry.kind {
            EntrantKind::Human => distance_km(GUESS, truth),
            EntrantKind::Model => distance_km(predictions[&entry.name], truth),
        };
        assert!((entry.current_error - expected).abs() < 1e-9);
        assert_eq!(entry.total_error, entry.current_error);
    }

    let body = guess(&server, &session_id, LatLng::new(10.0, 10.0)).await;
    assert_eq!(body.accepted, Some(false));
    assert_eq!(body.pending_guess, Some(GUESS));
}

#[tokio::test]
async fn test_full_game_then_restart() {
    let server = test_server();
    let (session_id, _) = create_session(&server).await;

    let early = post_state(&server, format!("/sessions/{session_id}/advance")).await;
    assert_eq!(early.error_code, Some(SessionResponseError::NotRevealed));

    for round_index in 0..3 {
        guess(&server, &session_id, GUESS).await;
        post_state(&server, format!("/sessions/{session_id}/reveal")).await;
        let premature = post_state(&server, format!("/sessions/{session_id}/restart")).await;
        assert_eq!(premature.error_code, Some(SessionResponseError::NotFinished));

        let body = post_state(&server, format!("/sessions/{session_id}/advance")).await;
        let state = body.state.expect("No state.");
        if round_index < 2 {
            assert_eq!(state.phase, Phase::Guessing);
            assert_eq!(state.round_index, round_index + 1);
            assert_eq!(state.pending_guess, None);
        } else {
            assert_eq!(state.phase, Phase::Finished);
            assert_eq!(state.round_index, 2);
        }
    }

    let leaderboard: LeaderboardResponse = server
        .get(&format!("/sessions/{session_id}/leaderboard"))
        .await
        .json();
    assert_eq!(leaderboard.phase, Some(Phase::Finished));
    let entries = leaderboard.entries.expect("No leaderboard.");
    assert_eq!(
        entries.iter().map(|entry| entry.rank).collect::<Vec<_>>(),
        [1, 2, 3, 4, 5]
    );
    assert!(entries
        .windows(2)
        .all(|pair| pair[0].total_error <= pair[1].total_error));
    assert!(entries.iter().all(|entry| entry.total_error_display.ends_with('m')));

    let body = post_state(&server, format!("/sessions/{session_id}/restart")).await;
    assert!(!body.error);
    let state = body.state.expect("No state.");
    assert_eq!(state.phase, Phase::Guessing);
    assert_eq!(state.round_index, 0);
    assert!(state
        .scores
        .iter()
        .all(|entry| entry.total_error == 0.0 && entry.current_error == 0.0));
}

#[tokio::test]
async fn test_get_state_matches_last_transition() {
    let server = test_server();
    let (session_id, _) = create_session(&server).await;
    guess(&server, &session_id, GUESS).await;
    let revealed = post_state(&server, format!("/sessions/{session_id}/reveal")).await;

    let response = server.get(&format!("/sessions/{session_id}")).await;

    response.assert_status_ok();
    response.assert_json(&revealed);
}

#[tokio::test]
async fn test_out_of_range_guess_is_rejected() {
    let server = test_server();
    let (session_id, _) = create_session(&server).await;

    let body = guess(&server, &session_id, LatLng::new(91.0, 0.0)).await;

    assert!(body.error);
    assert_eq!(body.error_code, Some(SessionResponseError::InvalidCoordinate));
    let state: SessionStateResponse = server.get(&format!("/sessions/{session_id}")).await.json();
    assert_eq!(state.state.and_then(|state| state.pending_guess), None);
}

#[tokio::test]
async fn test_unknown_session() {
    let server = test_server();

    let body: SessionStateResponse = server.get("/sessions/nope").await.json();
    assert_eq!(body.error_code, Some(SessionResponseError::SessionNotFound));
    assert!(body.state.is_none());

    let body = guess(&server, "nope", GUESS).await;
    assert_eq!(body.error_code, Some(SessionResponseError::SessionNotFound));

    let body = post_state(&server, String::from("/sessions/nope/reveal")).await;
    assert_eq!(body.error_code, Some(SessionResponseError::SessionNotFound));
}

#[tokio::test]
async fn test_remove_session() {
    let server = test_server();
    let (session_id, _) = create_session(&server).await;

    let body: RemoveSessionResponse = server
        .delete(&format!("/sessions/{session_id}"))
        .await
        .json();
    assert!(!body.error);

    let body: RemoveSessionResponse = server
        .delete(&format!("/sessions/{session_id}"))
        .await
        .json();
    assert_eq!(body.error_code, Some(SessionResponseError::SessionNotFound));
}

#[tokio::test]
async fn test_rejected_restart_keeps_later_sessions_reproducible() {
    let server = test_server();
    let args = crate::cli::tests::fake_args();
    let generator = DatasetGenerator::new(
        args.rounds as usize,
        default_regions(),
        default_predictors(),
        args.seed,
    );
    generator.generate().expect("Failed to generate.");
    let expected = generator.generate().expect("Failed to generate.");

    let (first_id, _) = create_session(&server).await;
    let rejected = post_state(&server, format!("/sessions/{first_id}/restart")).await;
    assert_eq!(rejected.error_code, Some(SessionResponseError::NotFinished));
    let (_, second) = create_session(&server).await;

    let round = second.state.expect("No state.").round;
    assert_eq!(round.id, expected.rounds()[0].id);
    assert_eq!(round.image_reference, expected.rounds()[0].image_reference);
}
