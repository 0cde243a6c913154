pub const ROUNDS_PER_GAME: u64 = 5;

/// `(name, noise)`, where noise is the full width in degrees of the uniform
/// perturbation applied to each axis of the ground truth.
pub const DEFAULT_PREDICTORS: [(&str, f64); 4] = [
    ("NeuralNet-Alpha", 1.5),
    ("VisualTrans-9", 0.8),
    ("Legacy-Vision", 4.0),
    ("SpatialAI-v2", 1.2),
];

pub const PLACE_NAMES: [&str; 5] = ["Sector A", "Quadrant B", "Node C", "Site D", "Point E"];

pub const IMAGE_WIDTH: u32 = 1200;
pub const IMAGE_HEIGHT: u32 = 800;
