/// An evenly spaced grid of candidate prices over a closed range.
///
/// The grid always includes both endpoints, so it has at least two points.
/// Demand, profit and the profit-optimal price are all evaluated on the same
/// grid, which keeps the reported optimum consistent with the sampled curves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PriceGridDto", into = "PriceGridDto")
)]
pub struct PriceGrid {
    low: f64,
    high: f64,
    resolution: usize,
}

impl PriceGrid {
    /// Creates a new grid with validation
    pub fn new(low: f64, high: f64, resolution: usize) -> Result<Self, RangeError> {
        Self::try_from(PriceGridDto {
            low,
            high,
            resolution,
        })
    }

    /// The range covered by the grid, as `(low, high)`
    pub fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// The number of grid points
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// The grid points in ascending order.
    ///
    /// The final point is exactly `high`, regardless of rounding in the step.
    pub fn prices(&self) -> impl Iterator<Item = f64> + Clone + use<> {
        let Self {
            low,
            high,
            resolution,
        } = *self;
        let span = (resolution - 1) as f64;
        (0..resolution).map(move |i| {
            if i + 1 == resolution {
                high
            } else {
                low + (high - low) * (i as f64) / span
            }
        })
    }

    /// Classify a price relative to the grid's range
    pub fn position(&self, price: f64) -> RangePosition {
        RangePosition::locate(price, self.low, self.high)
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct PriceGridDto {
    /// The lowest sampled price (finite, non-negative)
    pub low: f64,
    /// The highest sampled price (finite, above `low`)
    pub high: f64,
    /// The number of grid points (at least 2)
    pub resolution: usize,
}

impl From<PriceGrid> for PriceGridDto {
    fn from(value: PriceGrid) -> Self {
        Self {
            low: value.low,
            high: value.high,
            resolution: value.resolution,
        }
    }
}

impl TryFrom<PriceGridDto> for PriceGrid {
    type Error = RangeError;

    fn try_from(value: PriceGridDto) -> Result<Self, Self::Error> {
        let PriceGridDto {
            low,
            high,
            resolution,
        } = value;

        if !(low.is_finite() && high.is_finite()) {
            return Err(RangeError::NonFinite);
        }
        if low < 0.0 {
            return Err(RangeError::Negative(low));
        }
        if low >= high {
            return Err(RangeError::Inverted { low, high });
        }
        if resolution < 2 {
            return Err(RangeError::Resolution(resolution));
        }

        Ok(Self {
            low,
            high,
            resolution,
        })
    }
}

/// Where a price falls relative to a closed range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RangePosition {
    /// Strictly below the lower bound
    Below,
    /// Inside the range, bounds included
    Within,
    /// Strictly above the upper bound
    Above,
}

impl RangePosition {
    /// Classify `value` against the closed range `[low, high]`
    pub fn locate(value: f64, low: f64, high: f64) -> Self {
        if value < low {
            Self::Below
        } else if value > high {
            Self::Above
        } else {
            Self::Within
        }
    }
}

/// Errors that can occur when defining a sampling range
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// Error when a bound is NaN or infinite
    #[error("Range bounds must be finite")]
    NonFinite,
    /// Error when the lower bound is below zero
    #[error("Range cannot start at a negative price ({0})")]
    Negative(f64),
    /// Error when the lower bound is not below the upper bound
    #[error("Range low ({low}) must be below range high ({high})")]
    Inverted {
        /// The lower bound
        low: f64,
        /// The upper bound
        high: f64,
    },
    /// Error when fewer than two grid points are requested
    #[error("Resolution must be at least 2, got {0}")]
    Resolution(usize),
}
