use crate::dataset::models::{Dataset, Round};
use crate::map::distance_km;
use crate::map::models::LatLng;
use crate::sessions::consts::{HUMAN_COLOR, HUMAN_ENTRANT_NAME, MODEL_COLORS};
use crate::sessions::SessionError;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Guessing,
    Revealed,
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntrantKind {
    Human,
    Model,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub name: String,
    pub kind: EntrantKind,
    /// Error of the last revealed round, in kilometers.
    pub current_error: f64,
    /// Sum of every `current_error` recorded so far, in kilometers.
    pub total_error: f64,
    pub color: String,
}

impl ScoreEntry {
    fn new(name: String, kind: EntrantKind, color: String) -> Self {
        ScoreEntry {
            name,
            kind,
            current_error: 0.0,
            total_error: 0.0,
            color,
        }
    }

    fn record(&mut self, error: f64) {
        self.current_error = error;
        self.total_error += error;
    }
}

/// One player's run through a fixed sequence of rounds.
///
/// Every mutation goes through [`Session::submit_guess`], [`Session::reveal`],
/// [`Session::advance`] or [`Session::restart`], which enforce the
/// guessing -> revealed -> (guessing | finished) progression.
#[derive(Clone, Debug)]
pub struct Session {
    dataset: Dataset,
    current_round_index: usize,
    phase: Phase,
    pending_guess: Option<LatLng>,
    scores: Vec<ScoreEntry>,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        let scores = initial_scores(&dataset);
        Session {
            dataset,
            current_round_index: 0,
            phase: Phase::Guessing,
            pending_guess: None,
            scores,
        }
    }

    /// Places (or moves) the player's guess. Ignored outside of guessing,
    /// in which case `false` is returned.
    pub fn submit_guess(&mut self, guess: LatLng) -> bool {
        if self.phase != Phase::Guessing {
            return false;
        }
        self.pending_guess = Some(guess);
        true
    }

    pub fn reveal(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Guessing {
            return Err(SessionError::NotGuessing);
        }
        let guess = self.pending_guess.ok_or(SessionError::NoPendingGuess)?;
        let round = &self.dataset.rounds()[self.current_round_index];
        for entry in self.scores.iter_mut() {
            let error = match entry.kind {
                EntrantKind::Human => distance_km(guess, round.truth),
                EntrantKind::Model => distance_km(round.predictions[&entry.name], round.truth),
            };
            entry.record(error);
        }
        self.phase = Phase::Revealed;
        tracing::debug!(
            task = "session_transition",
            round_id = %round.id,
            round_index = self.current_round_index,
            to = "revealed",
        );
        Ok(())
    }

    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Revealed {
            return Err(SessionError::NotRevealed);
        }
        if self.is_last_round() {
            self.phase = Phase::Finished;
        } else {
            self.current_round_index += 1;
            self.pending_guess = None;
            self.phase = Phase::Guessing;
        }
        tracing::debug!(
            task = "session_transition",
            round_index = self.current_round_index,
            to = ?self.phase,
        );
        Ok(())
    }

    /// Starts over with a new dataset. The score entries are rebuilt from the
    /// new dataset's predictors, all zeroed.
    pub fn restart(&mut self, dataset: Dataset) -> Result<(), SessionError> {
        if self.phase != Phase::Finished {
            return Err(SessionError::NotFinished);
        }
        *self = Session::new(dataset);
        tracing::debug!(task = "session_transition", to = "guessing", restarted = true);
        Ok(())
    }

    pub fn current_round(&self) -> &Round {
        &self.dataset.rounds()[self.current_round_index]
    }

    pub fn current_round_index(&self) -> usize {
        self.current_round_index
    }

    pub fn total_rounds(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_last_round(&self) -> bool {
        self.current_round_index + 1 == self.dataset.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_guess(&self) -> Option<LatLng> {
        self.pending_guess
    }

    /// Scores in entry order: the human first, then predictors.
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    /// Scores sorted by total error, best first.
    pub fn leaderboard(&self) -> Vec<ScoreEntry> {
        let mut scores = self.scores.clone();
        scores.sort_by(|a, b| a.total_error.total_cmp(&b.total_error));
        scores
    }
}

fn initial_scores(dataset: &Dataset) -> Vec<ScoreEntry> {
    let human = ScoreEntry::new(
        HUMAN_ENTRANT_NAME.to_string(),
        EntrantKind::Human,
        HUMAN_COLOR.to_string(),
    );
    let models = dataset
        .predictor_names()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            ScoreEntry::new(
                name.clone(),
                EntrantKind::Model,
                MODEL_COLORS[index % MODEL_COLORS.len()].to_string(),
            )
        });
    std::iter::once(human).chain(models).collect()
}
