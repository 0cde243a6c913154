pub const HUMAN_ENTRANT_NAME: &str = "Human Subject";

pub const HUMAN_COLOR: &str = "#0EA5E9";

pub const MODEL_COLORS: [&str; 4] = ["#D946EF", "#F59E0B", "#6366F1", "#EF4444"];
