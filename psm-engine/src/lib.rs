#![warn(missing_docs)]
//! Computations behind price-sensitivity and profit-optimal pricing analysis.
//!
//! Data flows through the components in this order:
//! - [`CostModel`] and [`SensitivityEstimator`] work directly from the inputs
//! - [`DemandModel`] scales an acceptance curve by the segment population, anchored on the estimate
//! - [`ProfitOptimizer`] combines demand and cost into profit and searches the price grid
//! - [`CurveSampler`] evaluates everything on the grid for presentation
//!
//! [`PricingEngine`] ties these together behind a single, stateless `analyze` call.

/**
 * Cost accounting and break-even quantities.
 */
mod cost;
pub use cost::CostModel;

/**
 * Threshold point estimates and their confidence intervals.
 */
mod sensitivity;
pub use sensitivity::SensitivityEstimator;

/**
 * Demand as a function of price, and the shapes it decays with.
 */
mod demand;
pub use demand::*;

/**
 * Profit as a function of price, and the grid search for its maximum.
 */
mod profit;
pub use profit::ProfitOptimizer;

/**
 * Curve series construction for presentation.
 */
mod sampler;
pub use sampler::CurveSampler;

/**
 * Tunable constants of the engine.
 */
mod settings;
pub use settings::{EngineSettings, SettingsError, ShapeKind};

mod engine;
pub use engine::PricingEngine;
