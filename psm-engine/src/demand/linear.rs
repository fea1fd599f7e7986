use super::{bend, progress};
use psm_core::ports::AcceptanceCurve;

/// Acceptance falling in a straight line from 1 at PMC to 0 at `PME * (1 + margin)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearDecay {
    margin: f64,
    elasticity: f64,
}

impl LinearDecay {
    /// Create a linear decay reaching zero `margin` (as a fraction) beyond PME
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            elasticity: 1.0,
        }
    }

    /// Bend the decay by `elasticity`; 1 keeps the straight line
    pub fn with_elasticity(self, elasticity: f64) -> Self {
        Self { elasticity, ..self }
    }
}

impl Default for LinearDecay {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl AcceptanceCurve for LinearDecay {
    fn acceptance(&self, price: f64, pmc: f64, pme: f64) -> f64 {
        1.0 - bend(progress(price, pmc, pme, self.margin), self.elasticity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_anchors() {
        let curve = LinearDecay::new(0.0);
        assert_eq!(curve.acceptance(10.0, 10.0, 20.0), 1.0);
        assert_eq!(curve.acceptance(15.0, 10.0, 20.0), 0.5);
        assert_eq!(curve.acceptance(20.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn test_elasticity_moves_the_drop() {
        let (inelastic, elastic) = (
            LinearDecay::new(0.0).with_elasticity(0.5),
            LinearDecay::new(0.0).with_elasticity(2.0),
        );
        assert_eq!(elastic.acceptance(10.0, 10.0, 20.0), 1.0);
        assert_eq!(elastic.acceptance(20.0, 10.0, 20.0), 0.0);
        assert!(elastic.acceptance(15.0, 10.0, 20.0) < 0.5);
        assert!(inelastic.acceptance(15.0, 10.0, 20.0) > 0.5);
        assert_eq!(inelastic.acceptance(20.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn test_margin_extends_tail() {
        let curve = LinearDecay::new(0.5);
        assert!(curve.acceptance(20.0, 10.0, 20.0) > 0.0);
        assert_eq!(curve.acceptance(30.0, 10.0, 20.0), 0.0);
    }
}
