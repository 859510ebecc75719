use ndarray::{Array, ArrayView, ArrayViewMut, Dimension};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::ash::ash;
use super::coefficients::Coefficients;
use super::functions::{Activation, Route};
use crate::error::{Result, SafsError};
use crate::layers::meta_acon::{MetaAcon, DEFAULT_REDUCTION};

/// Parametric activation dispatcher.
///
/// Owns the coefficients `p1..p5` and, when built with a channel width, the
/// meta-ACON gate. Every forward path borrows `self` immutably.
///
/// ```rust
/// use safs::activations::ParametricActivation;
/// use ndarray::array;
///
/// let act = ParametricActivation::new(None, 2.0, 1.0, 1.0, 1.0, 1.0).unwrap();
/// let y = act.forward(array![1.0f32, -1.0, 2.0].view(), "linear").unwrap();
/// assert_eq!(y, array![2.0, -2.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParametricActivation {
    pub coefficients: Coefficients,
    pub meta_acon: Option<MetaAcon>,
}

impl ParametricActivation {
    /// Create a dispatcher with fixed coefficients. `acon_size` enables the
    /// meta-ACON gate for that many channels, randomly initialized.
    pub fn new(acon_size: Option<usize>, p1: f32, p2: f32, p3: f32, p4: f32, p5: f32) -> Result<Self> {
        let meta_acon = match acon_size {
            Some(width) => Some(MetaAcon::new(width, DEFAULT_REDUCTION, &mut StdRng::from_entropy())?),
            None => None,
        };
        Ok(ParametricActivation {
            coefficients: Coefficients::new(p1, p2, p3, p4, p5),
            meta_acon,
        })
    }

    /// Create a dispatcher from prepared parts.
    pub fn from_parts(coefficients: Coefficients, meta_acon: Option<MetaAcon>) -> Self {
        ParametricActivation { coefficients, meta_acon }
    }

    /// Apply the activation named `name`.
    ///
    /// Unknown names log a warning and use `relu` with the same coefficients.
    pub fn forward<D: Dimension>(&self, x: ArrayView<'_, f32, D>, name: &str) -> Result<Array<f32, D>> {
        self.apply(x, Activation::resolve(name))
    }

    /// Apply `activation` to `x`. The output has the shape of `x`.
    pub fn apply<D: Dimension>(&self, x: ArrayView<'_, f32, D>, activation: Activation) -> Result<Array<f32, D>> {
        let params = self.coefficients.values();
        match activation.route() {
            Route::Elementwise(formula) => Ok(x.mapv(|v| formula(&params, v))),
            Route::PercentileThreshold => ash(x, params.p1),
            Route::MetaAcon => self.gate()?.forward(x),
        }
    }

    /// In-place variant of [`apply`](Self::apply).
    pub fn apply_inplace<D: Dimension>(&self, mut x: ArrayViewMut<'_, f32, D>, activation: Activation) -> Result<()> {
        let params = self.coefficients.values();
        match activation.route() {
            Route::Elementwise(formula) => x.mapv_inplace(|v| formula(&params, v)),
            Route::PercentileThreshold => {
                let output = ash(x.view(), params.p1)?;
                x.assign(&output);
            }
            Route::MetaAcon => {
                let output = self.gate()?.forward(x.view())?;
                x.assign(&output);
            }
        }
        Ok(())
    }

    fn gate(&self) -> Result<&MetaAcon> {
        self.meta_acon.as_ref().ok_or_else(|| {
            SafsError::invalid_parameter("acon_size", "meta_acon requires a dispatcher built with a channel width")
        })
    }
}

/// Apply the activation named `name` with all coefficients at 1.
///
/// `meta_acon` has no gate here and returns an error.
pub fn activate<D: Dimension>(x: ArrayView<'_, f32, D>, name: &str) -> Result<Array<f32, D>> {
    ParametricActivation::default().forward(x, name)
}
