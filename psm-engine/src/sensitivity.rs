use psm_core::models::{ConfidenceLevel, Interval, SensitivityEstimate, SurveyInput};
use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided 95% critical value of the standard normal distribution
const Z_95: f64 = 1.959_963_984_540_054;

/// Turns aggregated survey thresholds into point estimates with confidence intervals.
///
/// The survey-reported thresholds are taken as the point estimates directly.
/// Uncertainty is modelled as proportional to price and shrinking with the
/// square root of the sample size:
///
/// `stderr = price * dispersion / sqrt(sample_size)`
///
/// and each interval is the estimate ± `z * stderr`, where `z` is the two-sided
/// critical value of the standard normal distribution at the requested level.
/// Lower bounds are floored at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensitivityEstimator {
    dispersion: f64,
}

impl Default for SensitivityEstimator {
    fn default() -> Self {
        Self { dispersion: 0.25 }
    }
}

impl SensitivityEstimator {
    /// Create an estimator with the given dispersion constant.
    ///
    /// Callers outside the crate go through [`EngineSettings::estimator`](crate::EngineSettings::estimator),
    /// which only runs on validated (positive, finite) dispersion.
    pub(crate) fn new(dispersion: f64) -> Self {
        Self { dispersion }
    }

    /// The dispersion constant `k`
    pub fn dispersion(&self) -> f64 {
        self.dispersion
    }

    /// The two-sided critical value of the standard normal at `confidence`
    pub fn z_score(confidence: ConfidenceLevel) -> f64 {
        let tail = (1.0 - confidence.get()) / 2.0;
        match Normal::new(0.0, 1.0) {
            Ok(normal) => normal.inverse_cdf(1.0 - tail),
            Err(_) => Z_95,
        }
    }

    /// The standard error of a threshold at `price` from `sample_size` respondents
    pub fn standard_error(&self, price: f64, sample_size: u32) -> f64 {
        price * self.dispersion / f64::from(sample_size).sqrt()
    }

    /// The interval `price ± z * stderr`, floored at zero
    pub fn interval(&self, price: f64, sample_size: u32, z: f64) -> Interval {
        let half_width = z * self.standard_error(price, sample_size);
        Interval {
            low: (price - half_width).max(0.0),
            high: price + half_width,
        }
    }

    /// Estimate both thresholds of `survey` at the given confidence level
    pub fn estimate(&self, survey: &SurveyInput, confidence: ConfidenceLevel) -> SensitivityEstimate {
        let z = Self::z_score(confidence);
        let n = survey.sample_size();

        SensitivityEstimate {
            pmc: survey.pmc_price(),
            pme: survey.pme_price(),
            pmc_interval: self.interval(survey.pmc_price(), n, z),
            pme_interval: self.interval(survey.pme_price(), n, z),
            confidence,
        }
    }
}
