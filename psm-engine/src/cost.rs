use psm_core::models::{BreakEven, CostStructure, PricePoint, PricingError};

/// Cost accounting over a fixed [`CostStructure`].
///
/// All methods are pure functions of the cost structure and their arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostModel(CostStructure);

impl CostModel {
    /// Wrap a validated cost structure
    pub fn new(cost: CostStructure) -> Self {
        Self(cost)
    }

    /// The underlying cost structure
    pub fn structure(&self) -> &CostStructure {
        &self.0
    }

    /// `fixed_cost + variable_cost * quantity`
    pub fn total_cost(&self, quantity: f64) -> f64 {
        self.0.fixed_cost() + self.0.variable_cost() * quantity
    }

    /// The contribution of each unit sold at `price`
    pub fn unit_margin(&self, price: f64) -> f64 {
        price - self.0.variable_cost()
    }

    /// The gross margin at `price` in percent, or None when no unit margin is made
    pub fn gross_margin(&self, price: f64) -> Option<f64> {
        let margin = self.unit_margin(price);
        (margin > 0.0 && price.is_finite()).then(|| margin / price * 100.0)
    }

    /// The number of units that must be sold at `price` to cover all costs.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NoMargin`] when `price` does not exceed the variable
    /// cost, since then no finite quantity covers the fixed cost, and
    /// [`PricingError::NonPositivePrice`] for non-finite prices.
    pub fn break_even_quantity(&self, price: f64) -> Result<f64, PricingError> {
        if price.is_infinite() {
            return Err(PricingError::NonPositivePrice(price));
        }
        let margin = self.unit_margin(price);
        // the negation also rejects NaN
        if !(margin > 0.0) {
            return Err(PricingError::NoMargin {
                price,
                variable_cost: self.0.variable_cost(),
            });
        }
        Ok(self.0.fixed_cost() / margin)
    }

    /// [`Self::break_even_quantity`], paired with the price it was computed for
    pub fn break_even(&self, price: PricePoint) -> Result<BreakEven, PricingError> {
        let price = price.get();
        Ok(BreakEven {
            price,
            quantity: self.break_even_quantity(price)?,
        })
    }
}

impl From<CostStructure> for CostModel {
    fn from(value: CostStructure) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model(fixed: f64, variable: f64) -> CostModel {
        CostModel::new(CostStructure::new(fixed, variable).unwrap())
    }

    #[test]
    fn test_total_cost() {
        let cost = model(5000.0, 10.0);
        assert_eq!(cost.total_cost(0.0), 5000.0);
        assert_eq!(cost.total_cost(100.0), 6000.0);
    }

    #[test]
    fn test_break_even_quantity() {
        let cost = model(5000.0, 10.0);
        assert_relative_eq!(
            cost.break_even_quantity(25.0).unwrap(),
            333.333_333_333,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_break_even_without_fixed_cost() {
        assert_eq!(model(0.0, 10.0).break_even_quantity(12.0).unwrap(), 0.0);
    }

    #[test]
    fn test_break_even_at_variable_cost() {
        assert_eq!(
            model(5000.0, 10.0).break_even_quantity(10.0).unwrap_err(),
            PricingError::NoMargin {
                price: 10.0,
                variable_cost: 10.0
            }
        );
    }

    #[test]
    fn test_break_even_below_variable_cost() {
        assert!(model(5000.0, 10.0).break_even_quantity(4.0).is_err());
        assert!(model(5000.0, 10.0).break_even_quantity(f64::NAN).is_err());
    }

    #[test]
    fn test_break_even_record() {
        let price = PricePoint::new(20.0).unwrap();
        assert_eq!(
            model(1000.0, 10.0).break_even(price).unwrap(),
            BreakEven {
                price: 20.0,
                quantity: 100.0
            }
        );
    }

    #[test]
    fn test_gross_margin() {
        let cost = model(5000.0, 50.0);
        assert_relative_eq!(cost.gross_margin(150.0).unwrap(), 66.666_666_666, epsilon = 1e-6);
        assert_eq!(cost.gross_margin(50.0), None);
        assert_eq!(cost.gross_margin(20.0), None);
    }
}
