/// A caller-chosen candidate price; always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(transparent))]
pub struct PricePoint(f64);

impl PricePoint {
    /// Creates a new price point with validation
    pub fn new(price: f64) -> Result<Self, PricingError> {
        Self::try_from(price)
    }

    /// The price as a number
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PricePoint {
    type Error = PricingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value > 0.0 && value.is_finite() {
            Ok(Self(value))
        } else {
            Err(PricingError::NonPositivePrice(value))
        }
    }
}

impl From<PricePoint> for f64 {
    fn from(value: PricePoint) -> Self {
        value.0
    }
}

/// The number of units that must be sold at `price` to cover all costs
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakEven {
    /// The price the quantity was computed for
    pub price: f64,
    /// The (finite, non-negative) break-even quantity
    pub quantity: f64,
}

/// Errors that can occur when evaluating a price
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Error when the price is zero, negative or not a finite number
    #[error("Price {0} must be positive and finite")]
    NonPositivePrice(f64),
    /// Error when each unit sold does not contribute a positive margin
    #[error("Price {price} does not exceed the variable cost {variable_cost}; break-even is unreachable")]
    NoMargin {
        /// The price under evaluation
        price: f64,
        /// The variable cost per unit
        variable_cost: f64,
    },
}
