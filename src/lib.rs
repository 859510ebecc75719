//! # safs - Parametric Activation Functions
//!
//! A catalogue of configurable activation functions for neural-network
//! layers, unified behind a single dispatcher. The dispatcher owns five
//! coefficients `p1..p5` and maps an activation name onto one of 28
//! formulas, from scaled builtins (`relu`, `gelu`, `mish`, ...) to
//! activate-or-not units with a learned channel gate (`meta_acon`) and
//! per-sample percentile thresholding (`ash`).
//!
//! ## Quick Start
//!
//! ```rust
//! use safs::builders::ParametricActivationBuilder;
//! use ndarray::array;
//!
//! let act = ParametricActivationBuilder::new()
//!     .p1(1.0)
//!     .p2(0.5)
//!     .build()
//!     .unwrap();
//!
//! let y = act.forward(array![-1.0f32, 0.0, 1.0].view(), "sigmoid").unwrap();
//! assert!((y[1] - 0.5).abs() < 1e-6);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation catalogue, coefficients and the dispatcher
//! - [`builders`] - Builder for configuring the dispatcher
//! - [`debug`] - Numerical checks on activation outputs
//! - [`error`] - Error types and result handling
//! - [`layers`] - Components of the meta-ACON gate (pointwise convolution,
//!   instance normalization, initialization)

pub mod activations;
pub mod builders;
pub mod debug;
pub mod error;
pub mod layers;

pub use activations::{activate, Activation, ParametricActivation};
pub use error::{Result, SafsError};

#[cfg(test)]
mod tests;
