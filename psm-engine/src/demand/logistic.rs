use super::{bend, progress};
use psm_core::ports::AcceptanceCurve;

/// An S-shaped acceptance curve between PMC and `PME * (1 + margin)`.
///
/// A logistic function centred halfway along the span, rescaled so that it is
/// exactly 1 at PMC and exactly 0 at the cutoff. Larger `steepness` concentrates
/// the drop around the midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticDecay {
    margin: f64,
    steepness: f64,
    elasticity: f64,
}

impl LogisticDecay {
    /// Create a logistic decay; `steepness` must be positive
    pub fn new(margin: f64, steepness: f64) -> Self {
        Self {
            margin,
            steepness,
            elasticity: 1.0,
        }
    }

    /// Bend the progress along the span by `elasticity` before the logistic is applied
    pub fn with_elasticity(self, elasticity: f64) -> Self {
        Self { elasticity, ..self }
    }

    fn sigmoid(&self, t: f64) -> f64 {
        1.0 / (1.0 + (self.steepness * (t - 0.5)).exp())
    }
}

impl Default for LogisticDecay {
    fn default() -> Self {
        Self::new(0.1, 8.0)
    }
}

impl AcceptanceCurve for LogisticDecay {
    fn acceptance(&self, price: f64, pmc: f64, pme: f64) -> f64 {
        let t = bend(progress(price, pmc, pme, self.margin), self.elasticity);
        let (top, bottom) = (self.sigmoid(0.0), self.sigmoid(1.0));
        let span = top - bottom;
        if !(span > f64::EPSILON) {
            // too flat to rescale; the logistic tends to a straight line here
            return 1.0 - t;
        }
        ((self.sigmoid(t) - bottom) / span).clamp(0.0, 1.0)
    }
}
