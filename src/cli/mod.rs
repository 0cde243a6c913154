use crate::dataset::consts::ROUNDS_PER_GAME;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Serves NeuralAtlas geolocation benchmark sessions.")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Rounds in every generated dataset.
    #[arg(long)]
    #[arg(default_value_t = ROUNDS_PER_GAME)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub rounds: u64,
    /// Makes generated datasets reproducible.
    #[arg(long)]
    pub seed: Option<u64>,
    /// NDJSON file with the regions ground truth is sampled from.
    #[arg(long)]
    pub regions: Option<PathBuf>,
    /// NDJSON file with the simulated models and their noise magnitudes.
    #[arg(long)]
    pub predictors: Option<PathBuf>,
    #[arg(long = "allowed-origin")]
    #[arg(default_values_t = [
        String::from("http://localhost:3000"),
        String::from("http://127.0.0.1:3000"),
    ])]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value = "neuralatlas_server=info")]
    pub log_filter: String,
}
