/// The shape of purchase acceptance between the marginal price thresholds.
///
/// An acceptance curve maps a candidate price to the fraction of a population
/// willing to buy at that price. Implementations must be:
/// - Bounded: the result lies in `[0, 1]`
/// - Anchored: the result is 1 for every price at or below `pmc`
/// - Non-increasing in price, and continuous whenever `pmc < pme`
/// - Vanishing: the result reaches 0 at some finite price above `pme`
///
/// The demand model evaluates the same curve at the confidence bounds of the
/// thresholds to produce its demand envelope, so implementations should depend
/// on the price only relative to the anchors.
pub trait AcceptanceCurve {
    /// The fraction of the population in `[0, 1]` that buys at `price`, given the
    /// point of marginal cheapness `pmc` and point of marginal expensiveness `pme`
    fn acceptance(&self, price: f64, pmc: f64, pme: f64) -> f64;
}

impl<T: AcceptanceCurve + ?Sized> AcceptanceCurve for &T {
    fn acceptance(&self, price: f64, pmc: f64, pme: f64) -> f64 {
        (**self).acceptance(price, pmc, pme)
    }
}
