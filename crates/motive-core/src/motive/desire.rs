//! Desires
//!
//! An actor's preferred operating range and ideal point for one motive.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Exponent applied to the distance outside the desired range
pub const OUT_OF_RANGE_EXPONENT: f64 = 1.5;

/// Target range `{min, ideal, max}` with `min <= ideal <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDesire")]
pub struct Desire {
    min: i32,
    ideal: i32,
    max: i32,
}

impl Desire {
    pub fn new(min: i32, ideal: i32, max: i32) -> Result<Self, ModelError> {
        if ideal < min || ideal > max {
            return Err(ModelError::DesireOutOfRange { min, ideal, max });
        }
        Ok(Self { min, ideal, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn ideal(&self) -> i32 {
        self.ideal
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Extra unhappiness for being outside `[min, max]`; zero inside the range.
    pub fn penalty(&self, value: f64) -> f64 {
        let below = f64::from(self.min) - value;
        let above = value - f64::from(self.max);
        below.max(above).max(0.0).powf(OUT_OF_RANGE_EXPONENT)
    }

    /// How content an actor is with `value`. Zero at the ideal point, negative elsewhere.
    pub fn happiness(&self, value: f64) -> f64 {
        -(value - f64::from(self.ideal)).abs() - self.penalty(value)
    }
}

#[derive(Deserialize)]
struct RawDesire {
    min: i32,
    ideal: i32,
    max: i32,
}

impl TryFrom<RawDesire> for Desire {
    type Error = ModelError;

    fn try_from(raw: RawDesire) -> Result<Self, Self::Error> {
        Desire::new(raw.min, raw.ideal, raw.max)
    }
}
