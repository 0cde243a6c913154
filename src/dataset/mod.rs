use consts::DEFAULT_PREDICTORS;
use models::Predictor;
use std::path::Path;

use crate::map::{read_ndjson, ConfigFileError};

pub mod consts;
pub mod generator;
pub mod models;

/// Reasons a dataset can't be built or handed to a session.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset has no rounds")]
    NoRounds,
    #[error("round `{round_id}` has no predictions")]
    NoPredictions { round_id: String },
    #[error("round `{round_id}` has a different set of predictors than the first round")]
    PredictorsMismatch { round_id: String },
    #[error("region pool is empty")]
    EmptyRegionPool,
    #[error("predictor table is empty")]
    EmptyPredictorTable,
    #[error("predictor `{name}` is listed more than once")]
    DuplicatePredictor { name: String },
}

pub fn default_predictors() -> Vec<Predictor> {
    DEFAULT_PREDICTORS
        .iter()
        .map(|&(name, noise)| Predictor {
            name: name.to_string(),
            noise,
        })
        .collect()
}

pub fn load_predictors(path: &Path) -> Result<Vec<Predictor>, ConfigFileError> {
    let predictors: Vec<Predictor> = read_ndjson(path)?;
    for (index, predictor) in predictors.iter().enumerate() {
        let entry = index + 1;
        predictor
            .validate()
            .map_err(|reason| ConfigFileError::Invalid { entry, reason })?;
        if predictors[..index].iter().any(|p| p.name == predictor.name) {
            return Err(ConfigFileError::Invalid {
                entry,
                reason: format!("duplicate predictor `{}`", predictor.name),
            });
        }
    }
    Ok(predictors)
}
