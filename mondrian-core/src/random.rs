use std::collections::VecDeque;

use rand::Rng;

/// Source of every random decision taken while subdividing a canvas.
///
/// The subdivider never reaches for a global generator, so a caller can
/// replay a fixed sequence of draws and get a fixed tree back.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;

    /// Uniform integer in `[low, high)`, or `low` when the range is empty.
    fn range(&mut self, low: u32, high: u32) -> u32;
}

/// Adapts any `rand` generator into a [RandomSource].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl RngSource<rand::rngs::ThreadRng> {
    /// The process-wide, unseeded generator.
    pub fn thread() -> Self {
        RngSource(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn coin(&mut self) -> bool {
        self.0.random_bool(0.5)
    }

    fn range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            low
        } else {
            self.0.random_range(low..high)
        }
    }
}

/// Replays a queue of unit values, then keeps returning `fallback`.
///
/// `coin` reads a value as heads when it is below `0.5` and `range` maps it
/// proportionally onto the requested range.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: VecDeque<f64>,
    fallback: f64,
}

impl SequenceSource {
    pub fn new(values: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        SequenceSource {
            values: values.into_iter().map(Self::clamp_unit).collect(),
            fallback: Self::clamp_unit(fallback),
        }
    }

    /// A source that returns `value` for every draw.
    pub fn constant(value: f64) -> Self {
        SequenceSource {
            values: VecDeque::new(),
            fallback: Self::clamp_unit(value),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn clamp_unit(value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0 - f64::EPSILON)
        }
    }

    fn next_value(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}

impl RandomSource for SequenceSource {
    fn unit(&mut self) -> f64 {
        self.next_value()
    }

    fn coin(&mut self) -> bool {
        self.next_value() < 0.5
    }

    fn range(&mut self, low: u32, high: u32) -> u32 {
        let value = self.next_value();

        if high <= low {
            return low;
        }

        let span = high - low;
        let offset = (value * span as f64) as u32;

        low + offset.min(span - 1)
    }
}
