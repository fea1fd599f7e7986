use crate::models::{
    BreakEven, ConfidenceLevel, CostError, CostStructure, CostStructureDto, CurveSeries,
    MarketSegment, MarketSegmentDto, OptimalPrice, PriceGrid, PricePoint, PricingError,
    RangeError, RangePosition, SegmentError, SensitivityEstimate, SurveyError, SurveyInput,
    SurveyInputDto,
};

/// The complete, validated parameter set of one analysis run.
///
/// The caller owns these values and passes a fresh snapshot on every
/// recomputation; the engine keeps nothing between runs.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisInput {
    /// The market the demand is scaled to
    pub segment: MarketSegment,
    /// The fixed and variable costs
    pub cost: CostStructure,
    /// The aggregated survey thresholds
    pub survey: SurveyInput,
    /// The caller's candidate price, used for the break-even computation
    pub user_price: PricePoint,
    /// The price grid to sample curves over
    pub grid: PriceGrid,
    /// The confidence level for the threshold intervals
    pub confidence: ConfidenceLevel,
}

/// The raw, unvalidated parameters of an analysis run
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct AnalysisInputDto {
    /// The market segment
    pub segment: MarketSegmentDto,
    /// The cost structure
    pub cost: CostStructureDto,
    /// The survey thresholds
    pub survey: SurveyInputDto,
    /// The candidate price
    pub user_price: f64,
    /// The sampled price range as `(low, high)`
    pub price_range: (f64, f64),
    /// The number of grid points
    pub resolution: usize,
    /// The confidence level, in (0, 1); 0.95 when omitted
    #[cfg_attr(feature = "serde", serde(default = "default_confidence_level"))]
    pub confidence_level: f64,
}

#[cfg(feature = "serde")]
fn default_confidence_level() -> f64 {
    ConfidenceLevel::default().get()
}

impl TryFrom<AnalysisInputDto> for AnalysisInput {
    type Error = AnalysisError;

    fn try_from(value: AnalysisInputDto) -> Result<Self, Self::Error> {
        let AnalysisInputDto {
            segment,
            cost,
            survey,
            user_price,
            price_range: (low, high),
            resolution,
            confidence_level,
        } = value;

        Ok(Self {
            segment: segment.try_into()?,
            cost: cost.try_into()?,
            survey: survey.try_into()?,
            user_price: user_price.try_into()?,
            grid: PriceGrid::new(low, high, resolution)?,
            confidence: confidence_level.try_into()?,
        })
    }
}

/// The evaluation of a single candidate price
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceCheck {
    /// The evaluated price
    pub price: f64,
    /// Expected units sold at `price`
    pub demand: f64,
    /// Profit at `price`
    pub profit: f64,
    /// Gross margin in percent, when the price exceeds the variable cost
    pub gross_margin: Option<f64>,
    /// Where the price falls relative to the acceptable zone `[pmc, pme]`
    pub acceptance: RangePosition,
    /// Where the price falls relative to the sampled range
    pub sampled: RangePosition,
    /// The break-even quantity, or why there is none
    pub break_even: Result<BreakEven, PricingError>,
}

/// Everything an analysis run produces
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    /// The threshold estimates and their intervals
    pub sensitivity: SensitivityEstimate,
    /// The sampled demand and profit curves
    pub curve: CurveSeries,
    /// The most profitable sampled price
    pub optimal: OptimalPrice,
    /// The break-even quantity at the caller's price, or why there is none
    pub break_even: Result<BreakEven, PricingError>,
    /// The full evaluation of the caller's price
    pub user_price: PriceCheck,
}

/// Errors that can occur when validating the parameters of an analysis run
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Error from the market segment
    #[error("invalid segment: {0}")]
    InvalidSegment(#[from] SegmentError),
    /// Error from the cost structure
    #[error("invalid cost structure: {0}")]
    InvalidCost(#[from] CostError),
    /// Error from the survey thresholds or confidence level
    #[error("invalid survey: {0}")]
    InvalidSurvey(#[from] SurveyError),
    /// Error from the candidate price
    #[error("invalid pricing: {0}")]
    InvalidPricing(#[from] PricingError),
    /// Error from the sampled range or its resolution
    #[error("invalid range: {0}")]
    InvalidRange(#[from] RangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> AnalysisInputDto {
        AnalysisInputDto {
            segment: MarketSegmentDto {
                name: "default".to_owned(),
                population: 10_000,
            },
            cost: CostStructureDto {
                fixed_cost: 5000.0,
                variable_cost: 10.0,
            },
            survey: SurveyInputDto {
                sample_size: 200,
                pmc_price: 15.0,
                pme_price: 40.0,
            },
            user_price: 25.0,
            price_range: (10.0, 50.0),
            resolution: 100,
            confidence_level: 0.95,
        }
    }

    #[test]
    fn test_valid_input() {
        let input = AnalysisInput::try_from(dto()).unwrap();
        assert_eq!(input.grid.range(), (10.0, 50.0));
        assert_eq!(input.user_price.get(), 25.0);
    }

    #[test]
    fn test_invalid_survey() {
        let mut raw = dto();
        raw.survey.pmc_price = 20.0;
        raw.survey.pme_price = 19.0;
        assert!(matches!(
            AnalysisInput::try_from(raw).unwrap_err(),
            AnalysisError::InvalidSurvey(SurveyError::Inverted { .. })
        ));
    }

    #[test]
    fn test_invalid_range() {
        let mut raw = dto();
        raw.price_range = (50.0, 20.0);
        assert!(matches!(
            AnalysisInput::try_from(raw).unwrap_err(),
            AnalysisError::InvalidRange(RangeError::Inverted { .. })
        ));
    }

    #[test]
    fn test_invalid_confidence() {
        let mut raw = dto();
        raw.confidence_level = 1.5;
        assert_eq!(
            AnalysisInput::try_from(raw).unwrap_err(),
            AnalysisError::InvalidSurvey(SurveyError::ConfidenceLevel(1.5))
        );
    }

    #[test]
    fn test_deserialize_dto() {
        let raw = r#"{
            "segment": { "name": "students", "population": 10000 },
            "cost": { "fixed_cost": 5000.0, "variable_cost": 10.0 },
            "survey": { "sample_size": 200, "pmc_price": 15.0, "pme_price": 40.0 },
            "user_price": 25.0,
            "price_range": [10.0, 50.0],
            "resolution": 50,
            "confidence_level": 0.9
        }"#;
        let dto = serde_json::from_str::<AnalysisInputDto>(raw).unwrap();
        let input = AnalysisInput::try_from(dto).unwrap();
        assert_eq!(input.grid.resolution(), 50);
        assert_eq!(input.confidence.get(), 0.9);
    }

    #[test]
    fn test_confidence_level_defaults() {
        let raw = r#"{
            "segment": { "name": "students", "population": 10000 },
            "cost": { "fixed_cost": 5000.0, "variable_cost": 10.0 },
            "survey": { "sample_size": 200, "pmc_price": 15.0, "pme_price": 40.0 },
            "user_price": 25.0,
            "price_range": [10.0, 50.0],
            "resolution": 50
        }"#;
        let dto = serde_json::from_str::<AnalysisInputDto>(raw).unwrap();
        let input = AnalysisInput::try_from(dto).unwrap();
        assert_eq!(input.confidence, ConfidenceLevel::default());
    }
}
