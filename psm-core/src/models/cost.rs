/// The cost structure of the product being priced.
///
/// Costs are split into a fixed amount incurred regardless of volume and a
/// variable amount incurred per unit sold. Both must be finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CostStructureDto", into = "CostStructureDto")
)]
pub struct CostStructure {
    fixed_cost: f64,
    variable_cost: f64,
}

impl CostStructure {
    /// Creates a new cost structure with validation
    pub fn new(fixed_cost: f64, variable_cost: f64) -> Result<Self, CostError> {
        Self::try_from(CostStructureDto {
            fixed_cost,
            variable_cost,
        })
    }

    /// The cost incurred independent of volume
    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    /// The cost incurred for each unit sold
    pub fn variable_cost(&self) -> f64 {
        self.variable_cost
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct CostStructureDto {
    /// The (finite, non-negative) fixed cost
    pub fixed_cost: f64,
    /// The (finite, non-negative) variable cost per unit
    pub variable_cost: f64,
}

impl From<CostStructure> for CostStructureDto {
    fn from(value: CostStructure) -> Self {
        Self {
            fixed_cost: value.fixed_cost,
            variable_cost: value.variable_cost,
        }
    }
}

impl TryFrom<CostStructureDto> for CostStructure {
    type Error = CostError;

    fn try_from(value: CostStructureDto) -> Result<Self, Self::Error> {
        let CostStructureDto {
            fixed_cost,
            variable_cost,
        } = value;

        if fixed_cost.is_nan() || variable_cost.is_nan() {
            return Err(CostError::NaN);
        }
        if fixed_cost.is_infinite() || variable_cost.is_infinite() {
            return Err(CostError::Infinity);
        }
        if fixed_cost < 0.0 || variable_cost < 0.0 {
            return Err(CostError::Negative);
        }

        Ok(Self {
            fixed_cost,
            variable_cost,
        })
    }
}

/// Errors that can occur when creating a CostStructure
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CostError {
    /// Error when any cost is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when any cost is infinite
    #[error("Costs cannot be infinite")]
    Infinity,
    /// Error when any cost is below zero
    #[error("Costs cannot be negative")]
    Negative,
}
