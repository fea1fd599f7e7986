use psm_core::{models::SensitivityEstimate, ports::AcceptanceCurve};

mod linear;
mod logistic;

pub use linear::LinearDecay;
pub use logistic::LogisticDecay;

/// The decay shapes shipped with the engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DemandShape {
    /// Straight-line decay between the anchors
    Linear(LinearDecay),
    /// S-shaped decay between the anchors
    Logistic(LogisticDecay),
}

impl AcceptanceCurve for DemandShape {
    fn acceptance(&self, price: f64, pmc: f64, pme: f64) -> f64 {
        match self {
            Self::Linear(curve) => curve.acceptance(price, pmc, pme),
            Self::Logistic(curve) => curve.acceptance(price, pmc, pme),
        }
    }
}

impl From<LinearDecay> for DemandShape {
    fn from(value: LinearDecay) -> Self {
        Self::Linear(value)
    }
}

impl From<LogisticDecay> for DemandShape {
    fn from(value: LogisticDecay) -> Self {
        Self::Logistic(value)
    }
}

/// How far `price` has progressed from `pmc` towards the cutoff `pme * (1 + margin)`.
///
/// Returns 0 at or below `pmc`, 1 at or above the cutoff, and the linear
/// interpolation in between.
pub(crate) fn progress(price: f64, pmc: f64, pme: f64, margin: f64) -> f64 {
    let cutoff = pme * (1.0 + margin);
    if price <= pmc {
        0.0
    } else if !cutoff.is_finite() {
        // the cutoff overflows, so measure in units of pme instead
        let base = pmc / pme;
        ((price / pme - base) / (1.0 + margin - base)).min(1.0)
    } else if price >= cutoff {
        1.0
    } else {
        (price - pmc) / (cutoff - pmc)
    }
}

/// Bend a progress value by `elasticity`, keeping both ends fixed.
///
/// Above 1 the curve rises faster early on (demand drops sooner), below 1 it
/// lingers near 0 and catches up at the cutoff.
pub(crate) fn bend(t: f64, elasticity: f64) -> f64 {
    if elasticity == 1.0 {
        t
    } else {
        t.powf(elasticity.recip())
    }
}

/// Expected quantity sold as a function of price.
///
/// `demand(price) = population * ceiling * acceptance(price)`, with the acceptance
/// curve anchored on the estimated thresholds. Evaluating the same curve at the
/// lower and upper confidence bounds of both thresholds yields the demand
/// envelope.
#[derive(Clone, Debug)]
pub struct DemandModel<C> {
    population: f64,
    ceiling: f64,
    estimate: SensitivityEstimate,
    curve: C,
}

impl<C: AcceptanceCurve> DemandModel<C> {
    /// Build a demand model for `population` buyers.
    ///
    /// `ceiling` is the fraction of the population that buys at or below the
    /// point of marginal cheapness.
    pub fn new(population: u64, ceiling: f64, estimate: SensitivityEstimate, curve: C) -> Self {
        Self {
            population: population as f64,
            ceiling,
            estimate,
            curve,
        }
    }

    /// The estimate the model is anchored on
    pub fn estimate(&self) -> &SensitivityEstimate {
        &self.estimate
    }

    /// The largest quantity the model can produce
    pub fn max_demand(&self) -> f64 {
        self.population * self.ceiling
    }

    fn scaled(&self, price: f64, pmc: f64, pme: f64) -> f64 {
        self.max_demand() * self.curve.acceptance(price, pmc, pme)
    }

    /// Expected units sold at `price`
    pub fn demand(&self, price: f64) -> f64 {
        self.scaled(price, self.estimate.pmc, self.estimate.pme)
    }

    /// Demand with both thresholds at the lower ends of their intervals
    pub fn demand_lower(&self, price: f64) -> f64 {
        let SensitivityEstimate {
            pmc_interval,
            pme_interval,
            ..
        } = self.estimate;
        self.scaled(price, pmc_interval.low, pme_interval.low)
    }

    /// Demand with both thresholds at the upper ends of their intervals
    pub fn demand_upper(&self, price: f64) -> f64 {
        let SensitivityEstimate {
            pmc_interval,
            pme_interval,
            ..
        } = self.estimate;
        self.scaled(price, pmc_interval.high, pme_interval.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SensitivityEstimator;
    use psm_core::models::SurveyInput;

    fn model() -> DemandModel<DemandShape> {
        let survey = SurveyInput::new(200, 15.0, 40.0).unwrap();
        let estimate = SensitivityEstimator::default().estimate(&survey, Default::default());
        DemandModel::new(10_000, 1.0, estimate, LinearDecay::default().into())
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(5.0, 10.0, 20.0, 0.0), 0.0);
        assert_eq!(progress(15.0, 10.0, 20.0, 0.0), 0.5);
        assert_eq!(progress(25.0, 10.0, 20.0, 0.0), 1.0);
        assert_eq!(progress(17.0, 10.0, 20.0, 0.2), 0.5);
    }

    #[test]
    fn test_overflowing_cutoff_still_decays() {
        let pme = f64::MAX / 2.0;
        let near = progress(pme, 1.0, pme, 10.0);
        let far = progress(f64::MAX, 1.0, pme, 10.0);
        assert!(near.is_finite() && far.is_finite());
        assert!(0.0 < near && near < far && far <= 1.0);
    }

    #[test]
    fn test_bend_keeps_anchors() {
        for elasticity in [0.1, 0.5, 1.0, 1.5, 2.0] {
            assert_eq!(bend(0.0, elasticity), 0.0);
            assert_eq!(bend(1.0, elasticity), 1.0);
        }
        assert!(bend(0.25, 2.0) > 0.25);
        assert!(bend(0.25, 0.5) < 0.25);
    }

    #[test]
    fn test_elastic_demand_is_lower() {
        let survey = SurveyInput::new(200, 15.0, 40.0).unwrap();
        let estimate = SensitivityEstimator::default().estimate(&survey, Default::default());
        let baseline = model();
        for elasticity in [1.2, 1.5, 2.0] {
            let elastic = DemandModel::new(
                10_000,
                1.0,
                estimate,
                LinearDecay::default().with_elasticity(elasticity),
            );
            for price in (0..=100).map(|i| i as f64 * 0.5) {
                assert!(elastic.demand(price) <= baseline.demand(price) + 1e-9);
            }
            assert_eq!(elastic.demand(15.0), 10_000.0);
            assert_eq!(elastic.demand(44.0), 0.0);
        }
    }

    #[test]
    fn test_degenerate_anchors() {
        assert_eq!(progress(0.0, 0.0, 0.0, 0.1), 0.0);
        assert_eq!(progress(1.0, 0.0, 0.0, 0.1), 1.0);
    }

    #[test]
    fn test_demand_at_pmc() {
        let model = model();
        assert_eq!(model.demand(0.0), 10_000.0);
        assert_eq!(model.demand(15.0), 10_000.0);
    }

    #[test]
    fn test_demand_vanishes() {
        let model = model();
        assert_eq!(model.demand(45.0), 0.0);
        assert_eq!(model.demand(1e9), 0.0);
    }

    #[test]
    fn test_ceiling() {
        let survey = SurveyInput::new(200, 15.0, 40.0).unwrap();
        let estimate = SensitivityEstimator::default().estimate(&survey, Default::default());
        let model = DemandModel::new(10_000, 0.6, estimate, LinearDecay::default());
        assert_eq!(model.demand(10.0), 6000.0);
        assert_eq!(model.max_demand(), 6000.0);
    }

    #[test]
    fn test_envelope_ordering() {
        let model = model();
        for price in [10.0, 14.5, 15.0, 20.0, 30.0, 40.0, 43.0, 46.0] {
            let (lower, central, upper) = (
                model.demand_lower(price),
                model.demand(price),
                model.demand_upper(price),
            );
            assert!(lower <= central, "{lower} > {central} at {price}");
            assert!(central <= upper, "{central} > {upper} at {price}");
        }
    }
}
