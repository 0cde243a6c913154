use crate::map::models::Region;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionsResponse {
    /// Regions ground truth is drawn from, for highlighting on the map.
    pub regions: Vec<Region>,
    pub truth_color: String,
}
