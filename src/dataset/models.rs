use crate::dataset::DatasetError;
use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    /// Opaque to the server, the front-end resolves and loads it.
    pub image_reference: String,
    pub location_label: String,
    pub truth: LatLng,
    pub predictions: BTreeMap<String, LatLng>,
}

/// A simulated model with a fixed accuracy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Predictor {
    pub name: String,
    pub noise: f64,
}

impl Predictor {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err(String::from("predictor name is empty"));
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(format!(
                "predictor `{}` has an invalid noise magnitude {}",
                self.name, self.noise
            ));
        }
        Ok(())
    }
}

/// An ordered, non-empty sequence of rounds sharing one predictor key set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    rounds: Vec<Round>,
    predictor_names: Vec<String>,
}

impl Dataset {
    pub fn new(rounds: Vec<Round>) -> Result<Self, DatasetError> {
        let first_round = rounds.first().ok_or(DatasetError::NoRounds)?;
        let predictor_names: Vec<String> = first_round.predictions.keys().cloned().collect();
        for round in rounds.iter() {
            if round.predictions.is_empty() {
                return Err(DatasetError::NoPredictions {
                    round_id: round.id.clone(),
                });
            }
            if !round.predictions.keys().eq(predictor_names.iter()) {
                return Err(DatasetError::PredictorsMismatch {
                    round_id: round.id.clone(),
                });
            }
        }
        Ok(Dataset {
            rounds,
            predictor_names,
        })
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn predictor_names(&self) -> &[String] {
        &self.predictor_names
    }
}
