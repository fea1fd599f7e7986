use crate::models::ConfidenceLevel;

/// A closed interval `[low, high]` around a point estimate
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// The lower bound
    pub low: f64,
    /// The upper bound
    pub high: f64,
}

impl Interval {
    /// The distance between the bounds
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `value` lies within the bounds (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Point estimates of the marginal price thresholds and their confidence intervals.
///
/// Derived from a [`SurveyInput`](crate::models::SurveyInput); never mutated after
/// computation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityEstimate {
    /// The point of marginal cheapness
    pub pmc: f64,
    /// The point of marginal expensiveness
    pub pme: f64,
    /// The confidence interval around `pmc`
    pub pmc_interval: Interval,
    /// The confidence interval around `pme`
    pub pme_interval: Interval,
    /// The confidence level both intervals were computed at
    pub confidence: ConfidenceLevel,
}

impl SensitivityEstimate {
    /// The acceptable price zone `[pmc, pme]`
    pub fn acceptable(&self) -> Interval {
        Interval {
            low: self.pmc,
            high: self.pme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        let interval = Interval {
            low: 14.0,
            high: 16.0,
        };
        assert_eq!(interval.width(), 2.0);
        assert!(interval.contains(14.0));
        assert!(interval.contains(16.0));
        assert!(!interval.contains(16.5));
    }
}
