//! Motives
//!
//! Named, bounded need axes. Actors track the current value of each motive;
//! the motive itself only carries its identity and clamp bounds.

pub mod desire;
pub mod update;

pub use desire::Desire;
pub use update::{ConstantUpdate, MotiveUpdate};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::ModelError;

/// A bounded scalar need axis. Identity is the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMotive")]
pub struct Motive {
    name: String,
    min: i32,
    max: i32,
}

impl Motive {
    pub const DEFAULT_MIN: i32 = -100;
    pub const DEFAULT_MAX: i32 = 100;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }

    /// Built-in hunger motive with default bounds
    pub fn hunger() -> Self {
        Self::new("hunger")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_value(&self) -> i32 {
        self.min
    }

    pub fn max_value(&self) -> i32 {
        self.max
    }

    /// Set the lower bound. Fails if it would exceed the upper bound.
    pub fn with_min(mut self, min: i32) -> Result<Self, ModelError> {
        if min > self.max {
            return Err(ModelError::MotiveBounds {
                motive: self.name,
                min,
                max: self.max,
            });
        }
        self.min = min;
        Ok(self)
    }

    /// Set the upper bound. Fails if it would drop below the lower bound.
    pub fn with_max(mut self, max: i32) -> Result<Self, ModelError> {
        if max < self.min {
            return Err(ModelError::MotiveBounds {
                motive: self.name,
                min: self.min,
                max,
            });
        }
        self.max = max;
        Ok(self)
    }

    /// Clamp a value into this motive's bounds
    pub fn clamp_value(&self, value: f64) -> f64 {
        value.clamp(f64::from(self.min), f64::from(self.max))
    }
}

/// Unchecked wire form, validated on the way in
#[derive(Deserialize)]
struct RawMotive {
    name: String,
    min: i32,
    max: i32,
}

impl TryFrom<RawMotive> for Motive {
    type Error = ModelError;

    fn try_from(raw: RawMotive) -> Result<Self, Self::Error> {
        if raw.min > raw.max {
            return Err(ModelError::MotiveBounds {
                motive: raw.name,
                min: raw.min,
                max: raw.max,
            });
        }
        Ok(Self {
            name: raw.name,
            min: raw.min,
            max: raw.max,
        })
    }
}

impl PartialEq for Motive {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Motive {}

impl Hash for Motive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Motive {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Motive {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let motive = Motive::new("boredom");
        assert_eq!(motive.min_value(), -100);
        assert_eq!(motive.max_value(), 100);
        assert_eq!(motive.name(), "boredom");
    }

    #[test]
    fn test_named_constructor() {
        assert_eq!(Motive::hunger().name(), "hunger");
    }

    #[test]
    fn test_bounds_can_be_narrowed() {
        let motive = Motive::new("hunger")
            .with_min(0)
            .unwrap()
            .with_max(10)
            .unwrap();
        assert_eq!(motive.min_value(), 0);
        assert_eq!(motive.max_value(), 10);
    }

    #[test]
    fn test_min_above_max_rejected() {
        let result = Motive::new("hunger").with_max(10).unwrap().with_min(11);
        assert!(matches!(
            result,
            Err(ModelError::MotiveBounds {
                min: 11,
                max: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_max_below_min_rejected() {
        let result = Motive::new("hunger").with_min(-5).unwrap().with_max(-6);
        assert!(result.is_err());
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let motive = Motive::new("flat")
            .with_min(3)
            .unwrap()
            .with_max(3)
            .unwrap();
        assert_eq!(motive.clamp_value(100.0), 3.0);
        assert_eq!(motive.clamp_value(-100.0), 3.0);
    }

    #[test]
    fn test_sorting_does_not_shadow_bounds() {
        let motives = vec![Motive::new("thirst"), Motive::new("hunger")];
        let first = motives.into_iter().min().unwrap();
        assert_eq!(first.name(), "hunger");
        assert_eq!(first.min_value(), Motive::DEFAULT_MIN);
        assert_eq!(first.max_value(), Motive::DEFAULT_MAX);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let motive = Motive::new("hunger").with_min(0).unwrap();
        let json = serde_json::to_string(&motive).unwrap();
        let decoded: Motive = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.min_value(), 0);
        assert_eq!(decoded.max_value(), 100);
    }

    #[test]
    fn test_deserialize_rejects_inverted_bounds() {
        let result = serde_json::from_str::<Motive>(r#"{"name":"hunger","min":10,"max":-10}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("may not exceed max"));
    }

    #[test]
    fn test_identity_is_name() {
        let a = Motive::new("hunger");
        let b = Motive::new("hunger").with_max(5).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Motive::new("thirst"));
    }
}
