use psm_core::models::{
    AnalysisError, AnalysisInput, CompetitorError, CompetitorPrice, Competitors, ConfidenceLevel,
    CostStructure, CostStructureDto, Map, MarketSegment, MarketSegmentDto, PriceGrid, PricePoint,
    SurveyInput, SurveyInputDto,
};
use psm_engine::{EngineSettings, PricingEngine, SettingsError};
use serde::{Deserialize, Serialize};

/// The scenario document accepted by every subcommand.
///
/// Everything is read raw and validated in [`Scenario::prepare`], so that a
/// bad document is reported with the same error kinds the engine uses.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(flatten)]
    pub parameters: Parameters,
    /// Reference prices shown alongside the results, at most five
    #[serde(default)]
    pub competitors: Vec<CompetitorPrice>,
    /// Labelled prices to evaluate in addition to the user price
    #[serde(default)]
    pub specified_prices: Map<String, f64>,
}

/// The parameters that feed the analysis itself
#[derive(Debug, Deserialize)]
pub struct Parameters {
    pub segment: MarketSegmentDto,
    pub cost: CostStructureDto,
    pub survey: SurveyInputDto,
    pub user_price: f64,
    /// Omit to sample from the variable cost up past the upper PME bound
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub resolution: Option<usize>,
    #[serde(default)]
    pub confidence_level: Option<f64>,
    /// Overrides the configured elasticity for this scenario only
    #[serde(default)]
    pub price_elasticity: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

/// A validated scenario, ready to hand to the engine
#[derive(Debug)]
pub struct Prepared {
    /// The engine to run, with any per-scenario overrides applied
    pub engine: PricingEngine,
    pub input: AnalysisInput,
    pub competitors: Competitors,
    pub specified_prices: Map<String, PricePoint>,
}

impl Scenario {
    pub fn prepare(self, engine: &PricingEngine) -> Result<Prepared, ScenarioError> {
        let engine = match self.parameters.price_elasticity {
            Some(elasticity) => PricingEngine::new(EngineSettings {
                elasticity,
                ..engine.settings().clone()
            })?,
            None => engine.clone(),
        };
        let input = self.parameters.resolve(&engine)?;

        let specified_prices = self
            .specified_prices
            .into_iter()
            .map(|(label, price)| Ok((label, PricePoint::new(price)?)))
            .collect::<Result<Map<_, _>, AnalysisError>>()?;

        Ok(Prepared {
            engine,
            input,
            competitors: Competitors::new(self.competitors)?,
            specified_prices,
        })
    }
}

impl Parameters {
    /// Validate the parameters, filling in the grid and confidence level
    /// from the engine settings when they are omitted
    pub fn resolve(self, engine: &PricingEngine) -> Result<AnalysisInput, AnalysisError> {
        let segment = MarketSegment::try_from(self.segment)?;
        let cost = CostStructure::try_from(self.cost)?;
        let survey = SurveyInput::try_from(self.survey)?;
        let user_price = PricePoint::new(self.user_price)?;
        let confidence = match self.confidence_level {
            Some(level) => ConfidenceLevel::new(level)?,
            None => ConfidenceLevel::default(),
        };

        let grid = match self.price_range {
            Some(PriceRange { low, high }) => PriceGrid::new(
                low,
                high,
                self.resolution.unwrap_or(engine.settings().resolution),
            )?,
            None => {
                let estimate = engine.estimate(&survey, confidence);
                engine.default_grid(&cost, &estimate, self.resolution)?
            }
        };

        Ok(AnalysisInput {
            segment,
            cost,
            survey,
            user_price,
            grid,
            confidence,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("invalid competitors: {0}")]
    Competitors(#[from] CompetitorError),
    #[error("invalid scenario settings: {0}")]
    Settings(#[from] SettingsError),
}
