//! Composite activations built from the scalar primitives: the FALU blend
//! functions, the S-shaped rectified linear unit and the soft-root-sign
//! family.

use ndarray::{Array, ArrayView, Dimension};

use super::primitives::{relu, sigmoid, swish};

/// First FALU blend: `swish(t) + alpha * sigmoid(t) * (1 - swish(t))`.
#[inline]
pub fn falu_d1(t: f32, alpha: f32) -> f32 {
    let s = swish(t);
    s + alpha * sigmoid(t) * (1.0 - s)
}

/// Second FALU blend: `D1(t, 1) + alpha * sigmoid(t) * (1 - 2 * D1(t, 1))`.
#[inline]
pub fn falu_d2(t: f32, alpha: f32) -> f32 {
    let d1 = falu_d1(t, 1.0);
    d1 + alpha * sigmoid(t) * (1.0 - 2.0 * d1)
}

/// FALU with blend factor `alpha`, evaluated on an already scaled input.
///
/// `alpha >= 1` uses the second blend with `alpha - 1`; everything else
/// (including NaN) uses the first.
#[inline]
pub fn falu(t: f32, alpha: f32) -> f32 {
    if alpha >= 1.0 {
        falu_d2(t, alpha - 1.0)
    } else {
        falu_d1(t, alpha)
    }
}

/// Breakpoints and slopes of an S-shaped rectified linear unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SRelu {
    pub t_left: f32,
    pub t_right: f32,
    pub a_left: f32,
    pub a_right: f32,
}

impl SRelu {
    /// `-relu(t_left - x) * a_left + relu(x - t_left) - relu(x - t_right) + relu(x - t_right) * a_right`
    ///
    /// The unit is meant to be used with `t_right >= t_left`. This is not
    /// checked: with inverted thresholds the middle term goes negative and the
    /// regions overlap.
    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        let y_left = -relu(-x + self.t_left) * self.a_left;
        let mid = relu(x - self.t_left) - relu(x - self.t_right);
        let y_right = relu(x - self.t_right) * self.a_right;
        y_left + y_right + mid
    }
}

/// Apply an S-shaped rectified linear unit to every element of `x`.
pub fn srelu<D: Dimension>(
    x: ArrayView<'_, f32, D>,
    t_left: f32,
    t_right: f32,
    a_left: f32,
    a_right: f32,
) -> Array<f32, D> {
    let unit = SRelu { t_left, t_right, a_left, a_right };
    x.mapv(|v| unit.eval(v))
}

/// Soft-root-sign shape `x / (x / a + e^(-x / b))`.
#[inline]
pub fn srs_scalar(x: f32, a: f32, b: f32) -> f32 {
    x / (x / a + (-x / b).exp())
}

/// Apply [`srs_scalar`] to every element of `x`.
pub fn srs<D: Dimension>(x: ArrayView<'_, f32, D>, a: f32, b: f32) -> Array<f32, D> {
    x.mapv(|v| srs_scalar(v, a, b))
}
