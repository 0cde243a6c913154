use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A named bounding box that ground-truth locations are sampled from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Region {
    /// Samples a point uniformly inside the bounding box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LatLng {
        LatLng {
            lat: self.min_lat + rng.gen::<f64>() * (self.max_lat - self.min_lat),
            lng: self.min_lng + rng.gen::<f64>() * (self.max_lng - self.min_lng),
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }

    pub fn validate(&self) -> Result<(), String> {
        let corners = [
            LatLng::new(self.min_lat, self.min_lng),
            LatLng::new(self.max_lat, self.max_lng),
        ];
        if corners.iter().any(|corner| !corner.is_valid()) {
            return Err(format!("region `{}` lies outside the globe", self.name));
        }
        if self.min_lat > self.max_lat || self.min_lng > self.max_lng {
            return Err(format!("region `{}` has an inverted bounding box", self.name));
        }
        Ok(())
    }
}
