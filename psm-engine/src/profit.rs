use crate::{CostModel, DemandModel};
use psm_core::{
    models::{OptimalPrice, PriceGrid, RangeError},
    ports::AcceptanceCurve,
};

/// Relative tolerance under which two profits are considered tied
const PROFIT_TOLERANCE: f64 = 1e-9;

/// Profit as a function of price, and a grid search for its maximum.
///
/// `profit(price) = price * demand(price) - total_cost(demand(price))`
///
/// The search is exhaustive over the sampled grid rather than a continuous
/// optimization: the profit curve may plateau, and the reported optimum must
/// be one of the prices that is actually plotted.
pub struct ProfitOptimizer<'a, C> {
    demand: &'a DemandModel<C>,
    cost: &'a CostModel,
}

impl<'a, C: AcceptanceCurve> ProfitOptimizer<'a, C> {
    /// Combine a demand model with a cost model
    pub fn new(demand: &'a DemandModel<C>, cost: &'a CostModel) -> Self {
        Self { demand, cost }
    }

    /// The profit earned at `price`
    pub fn profit(&self, price: f64) -> f64 {
        let quantity = self.demand.demand(price);
        price * quantity - self.cost.total_cost(quantity)
    }

    /// Search `resolution` evenly spaced prices over `[low, high]` for the greatest profit.
    ///
    /// Ties (within a small relative tolerance) resolve to the lowest price.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] when `low >= high`, either bound is invalid, or
    /// `resolution < 2`.
    pub fn find_optimal_price(
        &self,
        low: f64,
        high: f64,
        resolution: usize,
    ) -> Result<OptimalPrice, RangeError> {
        let grid = PriceGrid::new(low, high, resolution)?;
        Ok(self.optimize(&grid))
    }

    /// Search a validated grid for the greatest profit
    pub fn optimize(&self, grid: &PriceGrid) -> OptimalPrice {
        let samples = grid
            .prices()
            .map(|price| (price, self.profit(price)))
            .collect::<Vec<_>>();

        select_optimal(&samples).unwrap_or_else(|| {
            // only reachable if every profit is NaN
            let (low, _) = grid.range();
            OptimalPrice {
                price: low,
                profit: self.profit(low),
            }
        })
    }
}

/// Pick the lowest-priced sample whose profit is within tolerance of the maximum.
///
/// `samples` are `(price, profit)` pairs in ascending price order.
pub(crate) fn select_optimal(samples: &[(f64, f64)]) -> Option<OptimalPrice> {
    let max = samples
        .iter()
        .map(|&(_, profit)| profit)
        .reduce(f64::max)?;
    let tolerance = PROFIT_TOLERANCE * max.abs().max(1.0);

    samples
        .iter()
        .find(|&&(_, profit)| profit >= max - tolerance)
        .map(|&(price, profit)| OptimalPrice { price, profit })
}
