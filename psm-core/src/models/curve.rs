/// A single sample of the demand and profit curves
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    /// The sampled price
    pub price: f64,
    /// Expected units sold at `price`
    pub demand: f64,
    /// Profit at `price`, after fixed and variable costs
    pub profit: f64,
    /// Demand evaluated at the lower confidence bounds of the thresholds
    pub demand_lower: f64,
    /// Demand evaluated at the upper confidence bounds of the thresholds
    pub demand_upper: f64,
}

/// The sampled price with the greatest profit
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalPrice {
    /// The profit-maximizing price
    pub price: f64,
    /// The profit at that price
    pub profit: f64,
}

/// The demand and profit curves sampled over a price grid.
///
/// Points are ordered by ascending price. The series is transient: every
/// analysis produces a fresh one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSeries {
    /// The samples, in ascending price order
    pub points: Vec<CurvePoint>,
    /// The most profitable sample
    pub optimal: OptimalPrice,
}

impl CurveSeries {
    /// The lowest sampled price at which profit is non-negative, if any
    pub fn break_even_price(&self) -> Option<f64> {
        self.points
            .iter()
            .find(|point| point.profit >= 0.0)
            .map(|point| point.price)
    }
}
