use crate::cli::Args;
use crate::dataset::generator::DatasetGenerator;
use crate::dataset::{default_predictors, load_predictors};
use crate::map::{default_regions, load_regions, ConfigFileError};
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub generator: DatasetGenerator,
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init(args: &Args) -> Result<AppContext<HashMapSessionsStorage>, ConfigFileError> {
    let regions = match &args.regions {
        Some(path) => load_regions(path)?,
        None => default_regions(),
    };
    let predictors = match &args.predictors {
        Some(path) => load_predictors(path)?,
        None => default_predictors(),
    };
    tracing::info!(
        regions = regions.len(),
        predictors = predictors.len(),
        rounds = args.rounds,
        seeded = args.seed.is_some(),
        "Initialized dataset generation.",
    );
    Ok(AppContext {
        sessions: HashMapSessionsStorage::default(),
        generator: DatasetGenerator::new(args.rounds as usize, regions, predictors, args.seed),
    })
}
