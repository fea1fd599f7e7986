use crate::{CostModel, DemandModel, ProfitOptimizer, profit::select_optimal};
use psm_core::{
    models::{CurvePoint, CurveSeries, PriceCheck, PriceGrid, PricePoint, RangePosition},
    ports::AcceptanceCurve,
};

/// Evaluates demand, its envelope and profit over a price grid.
///
/// Each call produces a fresh series; nothing is cached between calls.
pub struct CurveSampler<'a, C> {
    demand: &'a DemandModel<C>,
    cost: &'a CostModel,
}

impl<'a, C: AcceptanceCurve> CurveSampler<'a, C> {
    /// Sample the given demand and cost models
    pub fn new(demand: &'a DemandModel<C>, cost: &'a CostModel) -> Self {
        Self { demand, cost }
    }

    /// Evaluate every grid point and locate the most profitable one
    pub fn sample(&self, grid: &PriceGrid) -> CurveSeries {
        let optimizer = ProfitOptimizer::new(self.demand, self.cost);

        let points = grid
            .prices()
            .map(|price| CurvePoint {
                price,
                demand: self.demand.demand(price),
                profit: optimizer.profit(price),
                demand_lower: self.demand.demand_lower(price),
                demand_upper: self.demand.demand_upper(price),
            })
            .collect::<Vec<_>>();

        // The optimum is selected from the very samples being returned, so what
        // is reported always matches what is plotted.
        let samples = points
            .iter()
            .map(|point| (point.price, point.profit))
            .collect::<Vec<_>>();
        let optimal = select_optimal(&samples).unwrap_or_else(|| optimizer.optimize(grid));

        CurveSeries { points, optimal }
    }

    /// Evaluate a single caller-chosen price against the models and the grid
    pub fn check(&self, price: PricePoint, grid: &PriceGrid) -> PriceCheck {
        let optimizer = ProfitOptimizer::new(self.demand, self.cost);
        let estimate = self.demand.estimate();
        let value = price.get();

        PriceCheck {
            price: value,
            demand: self.demand.demand(value),
            profit: optimizer.profit(value),
            gross_margin: self.cost.gross_margin(value),
            acceptance: RangePosition::locate(value, estimate.pmc, estimate.pme),
            sampled: grid.position(value),
            break_even: self.cost.break_even(price),
        }
    }
}
