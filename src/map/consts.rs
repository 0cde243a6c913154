/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const TRUTH_COLOR: &str = "#10B981";

/// `(name, min_lat, max_lat, min_lng, max_lng)`
pub const DEFAULT_REGIONS: [(&str, f64, f64, f64, f64); 10] = [
    ("Texas", 25.8, 36.5, -106.6, -93.5),
    ("Kansas", 37.0, 40.0, -102.0, -94.6),
    ("Oregon", 42.0, 46.2, -124.5, -116.5),
    ("Nevada", 35.0, 42.0, -120.0, -114.0),
    ("Oklahoma", 33.6, 37.0, -103.0, -94.4),
    ("Montana", 44.3, 49.0, -116.0, -104.0),
    ("Idaho", 42.0, 49.0, -117.2, -111.0),
    ("Nebraska", 40.0, 43.0, -104.0, -95.3),
    ("New Mexico", 31.3, 37.0, -109.0, -103.0),
    ("Wyoming", 41.0, 45.0, -111.0, -104.0),
];
