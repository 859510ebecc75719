//! # Activation Functions Module
//!
//! A catalogue of parametric activation functions behind one dispatcher.
//! Each activation is selected by name (or by [`Activation`] variant) and
//! shaped by five scalar coefficients `p1..p5`.
//!
//! ## Available Activations
//!
//! - **Scaled builtins**: `p1 * f(p2 * x)` for `relu`, `relu6`, `elu`, `selu`,
//!   `tanh`, `sigmoid`, `softplus`, `hardtan`, `logsigmiod`, `sin`, `cos`,
//!   `gelu`, `mish`, `hardswish`
//! - **Gated**: `swish`, `elish`, `hard_elish`, `TanhSoft-1`, `TanhSoft-2`
//! - **Symmetric log/exp**: `symlog`, `symexp`
//! - **Activate-or-not**: `acon`, `meta_acon` (learned per-channel gate),
//!   `FALU`
//! - **Piecewise linear**: `SRelu`
//! - **Rational**: `srs`
//! - **Thresholding**: `ash` (per-sample percentile)
//! - **Identity-like**: `linear`
//!
//! ## Usage Example
//!
//! ```rust
//! use safs::activations::{Activation, ParametricActivation};
//! use ndarray::array;
//!
//! let act = ParametricActivation::default();
//! let x = array![-2.0f32, 0.0, 3.0];
//!
//! let by_name = act.forward(x.view(), "relu").unwrap();
//! let by_variant = act.apply(x.view(), Activation::Relu).unwrap();
//! assert_eq!(by_name, by_variant);
//! assert_eq!(by_name, array![0.0, 0.0, 3.0]);
//! ```
//!
//! Unrecognized names never fail: they log a warning and use `relu`.

pub mod ash;
pub mod coefficients;
pub mod composite;
pub mod functions;
pub mod gelu;
pub mod parametric;
pub mod primitives;

pub use ash::{ash, percentile};
pub use coefficients::{Coefficient, Coefficients, Params};
pub use composite::{falu_d1, falu_d2, srelu, srs};
pub use functions::{Activation, Formula, Route};
pub use parametric::{activate, ParametricActivation};
