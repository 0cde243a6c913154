use crate::dataset::consts::{IMAGE_HEIGHT, IMAGE_WIDTH, PLACE_NAMES};
use crate::dataset::models::{Dataset, Predictor, Round};
use crate::dataset::DatasetError;
use crate::map::models::{LatLng, Region};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Builds `count` rounds from the given region pool and predictor table.
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    regions: &[Region],
    predictors: &[Predictor],
    rng: &mut R,
) -> Result<Dataset, DatasetError> {
    if regions.is_empty() {
        return Err(DatasetError::EmptyRegionPool);
    }
    if predictors.is_empty() {
        return Err(DatasetError::EmptyPredictorTable);
    }
    let mut seen = HashSet::new();
    if let Some(duplicate) = predictors.iter().find(|p| !seen.insert(p.name.as_str())) {
        return Err(DatasetError::DuplicatePredictor {
            name: duplicate.name.clone(),
        });
    }
    let rounds = (0..count)
        .map(|index| {
            // Non-empty, checked above.
            let region = regions.choose(rng).unwrap_or(&regions[0]);
            let truth = region.sample(rng);
            debug_assert!(region.contains(truth));
            let predictions = predictors
                .iter()
                .map(|predictor| (predictor.name.clone(), perturb(truth, predictor.noise, rng)))
                .collect::<BTreeMap<_, _>>();
            Round {
                id: format!("IMG-88{}", index + 1),
                image_reference: format!(
                    "https://picsum.photos/seed/{}/{IMAGE_WIDTH}/{IMAGE_HEIGHT}",
                    rng.gen::<u64>()
                ),
                location_label: format!(
                    "{} in {}",
                    PLACE_NAMES[index % PLACE_NAMES.len()],
                    region.name
                ),
                truth,
                predictions,
            }
        })
        .collect();
    Dataset::new(rounds)
}

/// Shifts `truth` by up to `noise / 2` degrees on each axis, keeping the
/// result on the globe: latitude is clamped at the poles, longitude wraps
/// across the antimeridian.
fn perturb<R: Rng + ?Sized>(truth: LatLng, noise: f64, rng: &mut R) -> LatLng {
    let lat = truth.lat + (rng.gen::<f64>() - 0.5) * noise;
    let lng = truth.lng + (rng.gen::<f64>() - 0.5) * noise;
    LatLng {
        lat: lat.clamp(-90.0, 90.0),
        lng: wrap_longitude(lng),
    }
}

fn wrap_longitude(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Produces a fresh dataset for every new or restarted session.
///
/// Each call gets its own RNG: seeded from `base_seed` plus a creation counter
/// when a seed is configured, from OS entropy otherwise.
#[derive(Clone, Debug)]
pub struct DatasetGenerator {
    rounds: usize,
    regions: Arc<Vec<Region>>,
    predictors: Arc<Vec<Predictor>>,
    base_seed: Option<u64>,
    datasets_generated: Arc<AtomicU64>,
}

impl DatasetGenerator {
    pub fn new(
        rounds: usize,
        regions: Vec<Region>,
        predictors: Vec<Predictor>,
        base_seed: Option<u64>,
    ) -> Self {
        Self {
            rounds,
            regions: Arc::new(regions),
            predictors: Arc::new(predictors),
            base_seed,
            datasets_generated: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn generate(&self) -> Result<Dataset, DatasetError> {
        let nth = self.datasets_generated.fetch_add(1, Ordering::Relaxed);
        let mut rng = match self.base_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(nth)),
            None => StdRng::from_entropy(),
        };
        generate(self.rounds, &self.regions, &self.predictors, &mut rng)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}
