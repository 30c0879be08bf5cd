pub(crate) const SPLIT_THRESHOLD: u32 = 60;
pub(crate) const SPLIT_ROLL_PROB: f64 = 2.0 / 3.0;

pub(crate) const MAX_RECURSION_DEPTH: u32 = 32;

pub(crate) const STROKE_COLOR: &str = "black";
pub(crate) const BACKGROUND_COLOR: &str = "white";

pub(crate) const BASIC_PALETTE: [&str; 3] = ["red", "blue", "yellow"];
pub(crate) const CUSTOM_PALETTE: [&str; 8] = [
    "red", "blue", "yellow", "green", "orange", "purple", "pink", "gold",
];
pub(crate) const CUSTOM_PATTERNS: [&str; 3] = ["stripes", "dots", "crosshatch"];
