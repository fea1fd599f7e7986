#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for price-sensitivity analysis.
///
/// This module contains the value types passed into and returned from an
/// analysis run. The models carry validation but no pricing logic; the
/// computations over them live in `psm-engine`.
pub mod models;

/// Interface traits for price-sensitivity analysis.
///
/// These traits define the contract between the demand model and the
/// interchangeable shapes it is built from, without committing to any
/// particular decay function.
pub mod ports;
