use crate::{
    Variant,
    constants::{
        BASIC_PALETTE, CUSTOM_PALETTE, CUSTOM_PATTERNS, MAX_RECURSION_DEPTH, SPLIT_ROLL_PROB,
        SPLIT_THRESHOLD,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct SubdividerConfig {
    // Regions at or below this size in either dimension are always leaves.
    pub split_threshold: u32,
    // Probability of each of the two rolls that must both succeed for a
    // region above the threshold to split.
    pub split_roll_prob: f64,
    // Split lines are drawn between 1/d and (d-1)/d of the region's extent.
    pub line_divisor: u32,
    // Whether a split may produce three columns instead of two.
    pub three_way_enabled: bool,
    // Probability of a leaf taking a palette color. Otherwise it takes a
    // pattern if any are configured, or the background.
    pub leaf_color_prob: f64,
    pub palette: &'static [&'static str],
    pub patterns: &'static [&'static str],
    // Regions reached at this depth are emitted as leaves.
    pub max_depth: u32,
}

impl Default for SubdividerConfig {
    fn default() -> Self {
        SubdividerConfig {
            split_threshold: SPLIT_THRESHOLD,
            split_roll_prob: SPLIT_ROLL_PROB,
            line_divisor: 3,
            three_way_enabled: false,
            leaf_color_prob: 0.25,
            palette: &BASIC_PALETTE,
            patterns: &[],
            max_depth: MAX_RECURSION_DEPTH,
        }
    }
}

impl SubdividerConfig {
    pub fn from_variant(variant: Variant) -> Self {
        let mut base = Self::default();

        match variant {
            Variant::Basic => {}
            Variant::Custom => {
                base.line_divisor = 4;
                base.three_way_enabled = true;
                base.leaf_color_prob = 0.75;
                base.palette = &CUSTOM_PALETTE;
                base.patterns = &CUSTOM_PATTERNS;
            }
        }

        base
    }

    // The `[low, high)` range a split line is drawn from for a region
    // starting at `origin` and spanning `extent` units.
    pub(crate) fn line_range(&self, origin: u32, extent: u32) -> (u32, u32) {
        let divisor = self.line_divisor.max(2);

        // Widened so the product cannot overflow, the quotient is below `extent`.
        let upper = u64::from(divisor - 1) * u64::from(extent) / u64::from(divisor);

        (origin + extent / divisor, origin + upper as u32)
    }
}
