use crate::{CostModel, CurveSampler, DemandModel, DemandShape, EngineSettings, SettingsError};
use psm_core::models::{
    AnalysisInput, AnalysisResult, ConfidenceLevel, CostStructure, Map, MarketSegment, PriceCheck,
    PriceGrid, PricePoint, RangeError, SensitivityEstimate, SurveyInput,
};
use std::hash::Hash;
use tracing::{Level, event, span};

/// The stateless entry point of the pricing analysis.
///
/// An engine holds only its (validated) settings; every call takes the full
/// parameter set and returns a freshly computed result, so identical inputs
/// always produce identical outputs.
#[derive(Clone, Debug)]
pub struct PricingEngine {
    settings: EngineSettings,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
        }
    }
}

impl PricingEngine {
    /// Create an engine, validating its settings
    pub fn new(settings: EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The settings this engine runs with
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Estimate the survey thresholds and their confidence intervals
    pub fn estimate(
        &self,
        survey: &SurveyInput,
        confidence: ConfidenceLevel,
    ) -> SensitivityEstimate {
        self.settings.estimator().estimate(survey, confidence)
    }

    /// Build the demand model for a segment, anchored on an estimate
    pub fn demand_model(
        &self,
        segment: &MarketSegment,
        estimate: SensitivityEstimate,
    ) -> DemandModel<DemandShape> {
        DemandModel::new(
            segment.population(),
            self.settings.ceiling,
            estimate,
            self.settings.curve(),
        )
    }

    /// The grid to sample when the caller supplies no range.
    ///
    /// Spans from the variable cost up to the upper confidence bound of PME,
    /// extended by the configured margin. `resolution` falls back to the
    /// configured default.
    pub fn default_grid(
        &self,
        cost: &CostStructure,
        estimate: &SensitivityEstimate,
        resolution: Option<usize>,
    ) -> Result<PriceGrid, RangeError> {
        PriceGrid::new(
            cost.variable_cost(),
            estimate.pme_interval.high * (1.0 + self.settings.margin),
            resolution.unwrap_or(self.settings.resolution),
        )
    }

    /// Run the full analysis over a validated parameter set
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let span = span!(
            Level::DEBUG,
            "analyze",
            population = input.segment.population(),
            resolution = input.grid.resolution(),
            confidence = input.confidence.get(),
        );
        let _guard = span.enter();

        let sensitivity = self.estimate(&input.survey, input.confidence);
        event!(
            Level::DEBUG,
            pmc = sensitivity.pmc,
            pmc_low = sensitivity.pmc_interval.low,
            pmc_high = sensitivity.pmc_interval.high,
            pme = sensitivity.pme,
            pme_low = sensitivity.pme_interval.low,
            pme_high = sensitivity.pme_interval.high,
            "estimated thresholds"
        );

        let demand = self.demand_model(&input.segment, sensitivity);
        let cost = CostModel::new(input.cost);
        let sampler = CurveSampler::new(&demand, &cost);

        let curve = sampler.sample(&input.grid);
        let optimal = curve.optimal;
        event!(
            Level::DEBUG,
            price = optimal.price,
            profit = optimal.profit,
            "located optimal price"
        );

        let user_price = sampler.check(input.user_price, &input.grid);
        if let Err(err) = &user_price.break_even {
            event!(Level::WARN, err = err.to_string(), "break-even unavailable");
        }

        AnalysisResult {
            sensitivity,
            curve,
            optimal,
            break_even: user_price.break_even.clone(),
            user_price,
        }
    }

    /// Evaluate a set of labelled prices against the same models as [`Self::analyze`]
    pub fn check_prices<K: Eq + Hash + Clone>(
        &self,
        input: &AnalysisInput,
        prices: &Map<K, PricePoint>,
    ) -> Map<K, PriceCheck> {
        let sensitivity = self.estimate(&input.survey, input.confidence);
        let demand = self.demand_model(&input.segment, sensitivity);
        let cost = CostModel::new(input.cost);
        let sampler = CurveSampler::new(&demand, &cost);

        prices
            .iter()
            .map(|(label, &price)| (label.clone(), sampler.check(price, &input.grid)))
            .collect()
    }
}
