use crate::{DemandShape, LinearDecay, LogisticDecay, SensitivityEstimator};

/// Which decay shape the demand model uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ShapeKind {
    /// See [`LinearDecay`]
    #[default]
    Linear,
    /// See [`LogisticDecay`]
    Logistic,
}

/// Tunable constants of the pricing engine.
///
/// Every field has a default, so partial configuration sources only need to
/// name the values they override.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineSettings {
    /// The dispersion constant `k` of the threshold standard error (positive)
    pub dispersion: f64,
    /// The fraction of the population buying at or below PMC, in (0, 1]
    pub ceiling: f64,
    /// How far beyond PME, as a fraction of PME, demand reaches zero, in [0, 10]
    pub margin: f64,
    /// The decay shape between the thresholds
    pub shape: ShapeKind,
    /// The steepness of the logistic shape, at least 0.001 (unused by the linear shape)
    pub steepness: f64,
    /// How sharply demand responds to price between the anchors, in [0.1, 2].
    /// 1 leaves the shape as is; larger values front-load the drop.
    pub elasticity: f64,
    /// The grid resolution used when a caller does not choose one (at least 2)
    pub resolution: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            dispersion: 0.25,
            ceiling: 1.0,
            margin: 0.1,
            shape: ShapeKind::Linear,
            steepness: 8.0,
            elasticity: 1.0,
            resolution: 100,
        }
    }
}

impl EngineSettings {
    /// The widest cutoff margin, as a multiple of PME
    pub const MAX_MARGIN: f64 = 10.0;
    /// The flattest logistic steepness that still separates the anchors numerically
    pub const MIN_STEEPNESS: f64 = 1e-3;
    /// The accepted elasticity range
    pub const ELASTICITY: (f64, f64) = (0.1, 2.0);

    /// Check every field against its documented bounds
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.dispersion > 0.0 && self.dispersion.is_finite()) {
            return Err(SettingsError::Dispersion(self.dispersion));
        }
        if !(self.ceiling > 0.0 && self.ceiling <= 1.0) {
            return Err(SettingsError::Ceiling(self.ceiling));
        }
        if !(self.margin >= 0.0 && self.margin <= Self::MAX_MARGIN) {
            return Err(SettingsError::Margin(self.margin));
        }
        if !(self.steepness >= Self::MIN_STEEPNESS && self.steepness.is_finite()) {
            return Err(SettingsError::Steepness(self.steepness));
        }
        let (min, max) = Self::ELASTICITY;
        if !(self.elasticity >= min && self.elasticity <= max) {
            return Err(SettingsError::Elasticity(self.elasticity));
        }
        if self.resolution < 2 {
            return Err(SettingsError::Resolution(self.resolution));
        }
        Ok(())
    }

    /// The threshold estimator these settings describe
    pub fn estimator(&self) -> SensitivityEstimator {
        SensitivityEstimator::new(self.dispersion)
    }

    /// The acceptance curve these settings describe
    pub fn curve(&self) -> DemandShape {
        match self.shape {
            ShapeKind::Linear => LinearDecay::new(self.margin)
                .with_elasticity(self.elasticity)
                .into(),
            ShapeKind::Logistic => LogisticDecay::new(self.margin, self.steepness)
                .with_elasticity(self.elasticity)
                .into(),
        }
    }
}

/// Errors from out-of-bounds engine settings
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Error when the dispersion constant is not positive and finite
    #[error("Dispersion must be positive and finite, got {0}")]
    Dispersion(f64),
    /// Error when the demand ceiling is outside (0, 1]
    #[error("Ceiling must lie in (0, 1], got {0}")]
    Ceiling(f64),
    /// Error when the cutoff margin is outside [0, MAX_MARGIN]
    #[error("Margin must lie in [0, {max}], got {0}", max = EngineSettings::MAX_MARGIN)]
    Margin(f64),
    /// Error when the logistic steepness is below MIN_STEEPNESS or not finite
    #[error("Steepness must be finite and at least {min}, got {0}", min = EngineSettings::MIN_STEEPNESS)]
    Steepness(f64),
    /// Error when the elasticity is outside the accepted range
    #[error(
        "Elasticity must lie in [{min}, {max}], got {0}",
        min = EngineSettings::ELASTICITY.0,
        max = EngineSettings::ELASTICITY.1
    )]
    Elasticity(f64),
    /// Error when the default resolution is below 2
    #[error("Resolution must be at least 2, got {0}")]
    Resolution(usize),
}
