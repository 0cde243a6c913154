use consts::{DEFAULT_REGIONS, EARTH_RADIUS_KM};
use models::{LatLng, Region};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod consts;
pub mod handlers;
pub mod models;
pub mod responses;
#[cfg(test)]
pub mod tests;

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("failed to read the file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error("invalid entry #{entry}: {reason}")]
    Invalid { entry: usize, reason: String },
    #[error("the file contains no entries")]
    Empty,
}

/// Great-circle distance between two points, in kilometers (haversine).
pub fn distance_km(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat.to_radians();
    let phi_2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `h` just past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{km:.2} km")
    }
}

pub fn default_regions() -> Vec<Region> {
    DEFAULT_REGIONS
        .iter()
        .map(|&(name, min_lat, max_lat, min_lng, max_lng)| Region {
            name: name.to_string(),
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
        .collect()
}

pub fn load_regions(path: &Path) -> Result<Vec<Region>, ConfigFileError> {
    let regions: Vec<Region> = read_ndjson(path)?;
    let mut seen = HashSet::new();
    for (index, region) in regions.iter().enumerate() {
        let entry = index + 1;
        region
            .validate()
            .map_err(|reason| ConfigFileError::Invalid { entry, reason })?;
        if !seen.insert(region.name.as_str()) {
            return Err(ConfigFileError::Invalid {
                entry,
                reason: format!("duplicate region `{}`", region.name),
            });
        }
    }
    Ok(regions)
}

/// Reads one JSON document per non-blank line.
pub fn read_ndjson<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConfigFileError> {
    let file_reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for (index, line) in file_reader.lines().enumerate() {
        let line_content = line?;
        if line_content.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(&line_content).map_err(|source| {
            ConfigFileError::Parse {
                line: index + 1,
                source,
            }
        })?;
        entries.push(entry);
    }
    if entries.is_empty() {
        return Err(ConfigFileError::Empty);
    }
    Ok(entries)
}
