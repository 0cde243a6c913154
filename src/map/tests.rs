use crate::map::models::{LatLng, Region};
use crate::map::{default_regions, distance_km, format_distance, load_regions, ConfigFileError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

const NEW_YORK: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.0060,
};
const LOS_ANGELES: LatLng = LatLng {
    lat: 34.0522,
    lng: -118.2437,
};

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "neuralatlas-{}-{}.ndjson",
        name,
        std::process::id()
    ));
    fs::write(&path, content).expect("Failed to write a temporary file.");
    path
}

#[test]
fn test_distance_new_york_los_angeles() {
    let distance = distance_km(NEW_YORK, LOS_ANGELES);

    assert!((distance - 3936.0).abs() < 5.0, "got {distance}");
}

#[test]
fn test_distance_is_symmetric() {
    let points = [
        NEW_YORK,
        LOS_ANGELES,
        LatLng::new(0.0, 0.0),
        LatLng::new(-33.8688, 151.2093),
        LatLng::new(89.9, 179.9),
        LatLng::new(-89.9, -179.9),
    ];
    for a in points {
        for b in points {
            let forward = distance_km(a, b);
            let backward = distance_km(b, a);
            assert!((forward - backward).abs() <= 1e-9 * forward.max(1.0));
        }
    }
}

#[test]
fn test_distance_to_self_is_zero() {
    for point in [NEW_YORK, LOS_ANGELES, LatLng::new(-90.0, 180.0)] {
        assert_eq!(distance_km(point, point), 0.0);
    }
}

#[test]
fn test_antipodal_distance_is_half_circumference() {
    let distance = distance_km(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));

    assert!(!distance.is_nan());
    assert!((distance - std::f64::consts::PI * 6371.0).abs() < 1e-6);
}

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(0.4567), "457 m");
    assert_eq!(format_distance(0.0), "0 m");
    assert_eq!(format_distance(1.0), "1.00 km");
    assert_eq!(format_distance(3935.746), "3935.75 km");
}

#[test]
fn test_region_sample_stays_inside_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    for region in default_regions() {
        for _ in 0..100 {
            assert!(region.contains(region.sample(&mut rng)));
        }
    }
}

#[test]
fn test_default_regions_are_valid() {
    let regions = default_regions();

    assert_eq!(regions.len(), 10);
    assert!(regions.iter().all(|region| region.validate().is_ok()));
}

#[test]
fn test_load_regions() {
    let path = temp_file(
        "regions-ok",
        "{\"name\": \"Utah\", \"minLat\": 37.0, \"maxLat\": 42.0, \"minLng\": -114.0, \"maxLng\": -109.0}\n\
         \n\
         {\"name\": \"Iowa\", \"minLat\": 40.4, \"maxLat\": 43.5, \"minLng\": -96.6, \"maxLng\": -90.1}\n",
    );

    let regions = load_regions(&path).expect("Failed to load regions.");
    fs::remove_file(&path).ok();

    assert_eq!(
        regions.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        ["Utah", "Iowa"]
    );
}

#[test]
fn test_load_regions_rejects_inverted_box() {
    let path = temp_file(
        "regions-inverted",
        "{\"name\": \"Utah\", \"minLat\": 42.0, \"maxLat\": 37.0, \"minLng\": -114.0, \"maxLng\": -109.0}\n",
    );

    let result = load_regions(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(
        result,
        Err(ConfigFileError::Invalid { entry: 1, .. })
    ));
}

#[test]
fn test_load_regions_rejects_duplicates() {
    let line = "{\"name\": \"Utah\", \"minLat\": 37.0, \"maxLat\": 42.0, \"minLng\": -114.0, \"maxLng\": -109.0}\n";
    let path = temp_file("regions-duplicate", &line.repeat(2));

    let result = load_regions(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(
        result,
        Err(ConfigFileError::Invalid { entry: 2, .. })
    ));
}

#[test]
fn test_load_regions_reports_bad_json() {
    let path = temp_file("regions-garbage", "not json\n");

    let result = load_regions(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigFileError::Parse { line: 1, .. })));
}

#[test]
fn test_load_regions_rejects_empty_file() {
    let path = temp_file("regions-empty", "\n");

    let result = load_regions(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(ConfigFileError::Empty)));
}

#[test]
fn test_region_outside_globe_is_invalid() {
    let region = Region {
        name: String::from("Nowhere"),
        min_lat: 80.0,
        max_lat: 95.0,
        min_lng: 0.0,
        max_lng: 1.0,
    };

    assert!(region.validate().is_err());
}

#[tokio::test]
async fn test_regions_endpoint_lists_default_pool() {
    let server = crate::http::tests::test_server();

    let response = server.get("/regions").await;

    response.assert_status_ok();
    response.assert_json(&crate::map::responses::RegionsResponse {
        regions: default_regions(),
        truth_color: String::from("#10B981"),
    });
}
