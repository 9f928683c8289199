use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("coffee count {got} is out of range (expected 0..={max})")]
    CoffeeCountOutOfRange { got: i64, max: u8 },
}

/// Number of coffees consumed in a day, always within `0..=CoffeeCount::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct CoffeeCount(u8);

impl CoffeeCount {
    pub const MAX: u8 = 5;

    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        if (0..=Self::MAX as i64).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(ValidationError::CoffeeCountOutOfRange {
                got: raw,
                max: Self::MAX,
            })
        }
    }

    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX as i64) as u8)
    }

    /// Validate `raw` according to `policy`.
    pub fn resolve(raw: i64, policy: OutOfRangePolicy) -> Result<Self, ValidationError> {
        match policy {
            OutOfRangePolicy::Reject => Self::new(raw),
            OutOfRangePolicy::Clamp => {
                let count = Self::clamped(raw);
                if count.get() as i64 != raw {
                    log::warn!("Clamping coffee count {} to {}", raw, count.get());
                }
                Ok(count)
            }
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn all() -> impl Iterator<Item = CoffeeCount> {
        (0..=Self::MAX).map(CoffeeCount)
    }
}

impl std::fmt::Display for CoffeeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for CoffeeCount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        CoffeeCount::new(raw).map_err(serde::de::Error::custom)
    }
}

/// What to do with a coffee count outside `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    #[default]
    Reject,
    Clamp,
}

impl OutOfRangePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutOfRangePolicy::Reject => "reject",
            OutOfRangePolicy::Clamp => "clamp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_count_in_range() {
        for raw in 0..=5 {
            assert_eq!(CoffeeCount::new(raw).map(CoffeeCount::get), Ok(raw as u8));
        }
    }

    #[test]
    fn rejects_negative_and_above_max() {
        assert_eq!(
            CoffeeCount::new(-1),
            Err(ValidationError::CoffeeCountOutOfRange { got: -1, max: 5 })
        );
        assert_eq!(
            CoffeeCount::new(6),
            Err(ValidationError::CoffeeCountOutOfRange { got: 6, max: 5 })
        );
    }

    #[test]
    fn clamp_policy_saturates() {
        assert_eq!(
            CoffeeCount::resolve(-3, OutOfRangePolicy::Clamp).map(CoffeeCount::get),
            Ok(0)
        );
        assert_eq!(
            CoffeeCount::resolve(42, OutOfRangePolicy::Clamp).map(CoffeeCount::get),
            Ok(5)
        );
        assert!(CoffeeCount::resolve(42, OutOfRangePolicy::Reject).is_err());
    }

    #[test]
    fn increment_and_decrement_stay_in_bounds() {
        let max = CoffeeCount::clamped(5);
        assert_eq!(max.increment(), max);
        let zero = CoffeeCount::default();
        assert_eq!(zero.decrement(), zero);
        assert_eq!(zero.increment().get(), 1);
    }

    #[test]
    fn error_message_names_the_range() {
        let err = CoffeeCount::new(9).unwrap_err();
        assert_eq!(err.to_string(), "coffee count 9 is out of range (expected 0..=5)");
    }
}
