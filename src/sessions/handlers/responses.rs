use crate::dataset::models::Round;
use crate::map::format_distance;
use crate::map::models::LatLng;
use crate::sessions::models::{EntrantKind, Phase, ScoreEntry, Session};
use crate::sessions::{RestartError, SessionError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the front-end needs to draw the current screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateView {
    pub round_index: usize,
    pub total_rounds: usize,
    pub is_last_round: bool,
    pub phase: Phase,
    pub pending_guess: Option<LatLng>,
    pub round: RoundView,
    pub scores: Vec<ScoreEntry>,
}

impl From<&Session> for SessionStateView {
    fn from(session: &Session) -> Self {
        SessionStateView {
            round_index: session.current_round_index(),
            total_rounds: session.total_rounds(),
            is_last_round: session.is_last_round(),
            phase: session.phase(),
            pending_guess: session.pending_guess(),
            round: RoundView::new(session.current_round(), session.phase()),
            scores: session.scores().to_vec(),
        }
    }
}

/// A round as shown to the player. The answer is withheld while guessing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub id: String,
    pub image_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truth: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<BTreeMap<String, LatLng>>,
}

impl RoundView {
    pub fn new(round: &Round, phase: Phase) -> Self {
        let answer_visible = phase != Phase::Guessing;
        RoundView {
            id: round.id.clone(),
            image_reference: round.image_reference.clone(),
            location_label: answer_visible.then(|| round.location_label.clone()),
            truth: answer_visible.then_some(round.truth),
            predictions: answer_visible.then(|| round.predictions.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub kind: EntrantKind,
    pub color: String,
    pub current_error: f64,
    pub current_error_display: String,
    pub total_error: f64,
    pub total_error_display: String,
}

impl LeaderboardEntry {
    pub fn ranked(session: &Session) -> Vec<Self> {
        session
            .leaderboard()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| LeaderboardEntry {
                rank: index + 1,
                current_error_display: format_distance(entry.current_error),
                total_error_display: format_distance(entry.total_error),
                name: entry.name,
                kind: entry.kind,
                color: entry.color,
                current_error: entry.current_error,
                total_error: entry.total_error,
            })
            .collect()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionResponseError {
    SessionNotFound,
    InvalidCoordinate,
    MalformedDataset,
    NoPendingGuess,
    NotGuessing,
    NotRevealed,
    NotFinished,
}

impl From<SessionError> for SessionResponseError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::NoPendingGuess => SessionResponseError::NoPendingGuess,
            SessionError::NotGuessing => SessionResponseError::NotGuessing,
            SessionError::NotRevealed => SessionResponseError::NotRevealed,
            SessionError::NotFinished => SessionResponseError::NotFinished,
        }
    }
}

impl From<RestartError> for SessionResponseError {
    fn from(error: RestartError) -> Self {
        match error {
            RestartError::Session(error) => error.into(),
            RestartError::Dataset(_) => SessionResponseError::MalformedDataset,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SessionStateView>,
}

/// Returned by every operation that reads or advances a session.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SessionStateView>,
}

impl SessionStateResponse {
    pub fn ok(session: &Session) -> Self {
        SessionStateResponse {
            error: false,
            error_code: None,
            state: Some(session.into()),
        }
    }

    pub fn rejected(error_code: SessionResponseError, session: Option<&Session>) -> Self {
        SessionStateResponse {
            error: true,
            error_code: Some(error_code),
            state: session.map(SessionStateView::from),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    /// `false` when the guess arrived outside of the guessing phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_guess: Option<LatLng>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<LeaderboardEntry>>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionResponseError>,
}
