/// Aggregated results of a Van Westendorp price-sensitivity survey.
///
/// The survey is summarised by its two marginal thresholds:
/// - `pmc_price`: the point of marginal cheapness, below which the product feels suspiciously cheap
/// - `pme_price`: the point of marginal expensiveness, above which the product feels too expensive
///
/// Both prices must be positive and finite, with `pmc_price < pme_price`, and the
/// sample must contain at least one respondent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SurveyInputDto", into = "SurveyInputDto")
)]
pub struct SurveyInput {
    sample_size: u32,
    pmc_price: f64,
    pme_price: f64,
}

impl SurveyInput {
    /// Creates a new survey input with validation
    pub fn new(sample_size: u32, pmc_price: f64, pme_price: f64) -> Result<Self, SurveyError> {
        Self::try_from(SurveyInputDto {
            sample_size,
            pmc_price,
            pme_price,
        })
    }

    /// The number of respondents
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    /// The point of marginal cheapness
    pub fn pmc_price(&self) -> f64 {
        self.pmc_price
    }

    /// The point of marginal expensiveness
    pub fn pme_price(&self) -> f64 {
        self.pme_price
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct SurveyInputDto {
    /// The number of respondents (strictly positive)
    pub sample_size: u32,
    /// The point of marginal cheapness
    pub pmc_price: f64,
    /// The point of marginal expensiveness (strictly above `pmc_price`)
    pub pme_price: f64,
}

impl From<SurveyInput> for SurveyInputDto {
    fn from(value: SurveyInput) -> Self {
        Self {
            sample_size: value.sample_size,
            pmc_price: value.pmc_price,
            pme_price: value.pme_price,
        }
    }
}

impl TryFrom<SurveyInputDto> for SurveyInput {
    type Error = SurveyError;

    fn try_from(value: SurveyInputDto) -> Result<Self, Self::Error> {
        let SurveyInputDto {
            sample_size,
            pmc_price,
            pme_price,
        } = value;

        if sample_size == 0 {
            return Err(SurveyError::EmptySample);
        }
        if pmc_price.is_nan() || pme_price.is_nan() {
            return Err(SurveyError::NaN);
        }
        if pmc_price.is_infinite() || pme_price.is_infinite() {
            return Err(SurveyError::Infinity);
        }
        if pmc_price <= 0.0 || pme_price <= 0.0 {
            return Err(SurveyError::NonPositivePrice);
        }
        if pmc_price >= pme_price {
            return Err(SurveyError::Inverted {
                pmc: pmc_price,
                pme: pme_price,
            });
        }

        Ok(Self {
            sample_size,
            pmc_price,
            pme_price,
        })
    }
}

/// The probability mass covered by a confidence interval.
///
/// Must lie strictly between 0 and 1; defaults to 95%.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(transparent))]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Creates a new confidence level with validation
    pub fn new(level: f64) -> Result<Self, SurveyError> {
        Self::try_from(level)
    }

    /// The level as a probability
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self(0.95)
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = SurveyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // NaN fails the comparison as well
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(SurveyError::ConfidenceLevel(value))
        }
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(value: ConfidenceLevel) -> Self {
        value.0
    }
}

/// Errors that can occur when validating survey data
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SurveyError {
    /// Error when the survey has no respondents
    #[error("Sample size must be positive")]
    EmptySample,
    /// Error when a threshold is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when a threshold is infinite
    #[error("Thresholds cannot be infinite")]
    Infinity,
    /// Error when a threshold is zero or negative
    #[error("Thresholds must be positive")]
    NonPositivePrice,
    /// Error when the cheapness threshold is not below the expensiveness threshold
    #[error("PMC ({pmc}) must be below PME ({pme})")]
    Inverted {
        /// The point of marginal cheapness
        pmc: f64,
        /// The point of marginal expensiveness
        pme: f64,
    },
    /// Error when the confidence level is outside (0, 1)
    #[error("Confidence level {0} must lie strictly between 0 and 1")]
    ConfidenceLevel(f64),
}
