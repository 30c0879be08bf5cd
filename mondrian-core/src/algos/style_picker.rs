use super::SubdividerConfig;
use crate::{random::RandomSource, types::Fill};

/// Uniform, stateless fill selection. Neighbouring leaves may repeat colors.
pub(crate) struct StylePicker;

impl StylePicker {
    pub fn pick<R: RandomSource + ?Sized>(
        choices: &'static [&'static str],
        rng: &mut R,
    ) -> Option<&'static str> {
        if choices.is_empty() {
            return None;
        }

        let idx = rng.range(0, choices.len() as u32) as usize;

        choices.get(idx).copied()
    }

    pub fn leaf_fill<R: RandomSource + ?Sized>(config: &SubdividerConfig, rng: &mut R) -> Fill {
        if rng.unit() < config.leaf_color_prob {
            Self::pick(config.palette, rng).map_or(Fill::Background, Fill::Color)
        } else {
            Self::pick(config.patterns, rng).map_or(Fill::Background, Fill::Pattern)
        }
    }
}
