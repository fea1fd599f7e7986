use crate::{Scenario, ScenarioError};
use psm_core::models::{
    AnalysisResult, CompetitorPrice, Map, PriceCheck, PriceGrid, RangePosition,
};
use psm_engine::PricingEngine;
use serde::Serialize;
use tracing::{Level, event};

/// Everything the `analyze` subcommand reports
#[derive(Debug, Serialize)]
pub struct Report {
    pub segment: String,
    pub population: u64,
    /// The grid the curves were sampled over, after defaults were applied
    pub grid: PriceGrid,
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// The lowest sampled price that does not lose money
    pub break_even_price: Option<f64>,
    pub specified_prices: Map<String, PriceCheck>,
    pub competitors: Vec<CompetitorPosition>,
}

/// A competitor's price placed against the estimated acceptable range
#[derive(Debug, Serialize)]
pub struct CompetitorPosition {
    #[serde(flatten)]
    pub competitor: CompetitorPrice,
    pub acceptance: RangePosition,
}

pub fn report(engine: &PricingEngine, scenario: Scenario) -> Result<Report, ScenarioError> {
    let prepared = scenario.prepare(engine)?;
    let engine = &prepared.engine;
    let result = engine.analyze(&prepared.input);
    let specified_prices = engine.check_prices(&prepared.input, &prepared.specified_prices);

    let acceptable = result.sensitivity.acceptable();
    let competitors = prepared
        .competitors
        .iter()
        .map(|competitor| CompetitorPosition {
            acceptance: RangePosition::locate(competitor.price, acceptable.low, acceptable.high),
            competitor: competitor.clone(),
        })
        .collect();

    event!(
        Level::INFO,
        segment = prepared.input.segment.name(),
        optimal_price = result.optimal.price,
        optimal_profit = result.optimal.profit,
        "analysis complete"
    );

    Ok(Report {
        segment: prepared.input.segment.name().to_owned(),
        population: prepared.input.segment.population(),
        grid: prepared.input.grid,
        break_even_price: result.curve.break_even_price(),
        result,
        specified_prices,
        competitors,
    })
}
