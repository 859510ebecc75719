//! Scalar building blocks shared by the activation formulas.
//!
//! Constants follow the usual deep-learning framework defaults: ELU uses
//! `alpha = 1`, softplus switches to the identity above `20`, and SELU uses
//! the self-normalizing constants from Klambauer et al.

const SELU_ALPHA: f32 = 1.673_263_2;
const SELU_SCALE: f32 = 1.050_701;
const SOFTPLUS_THRESHOLD: f32 = 20.0;

/// Logistic sigmoid `1 / (1 + e^(-x))`.
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Sign function with `sign(0) = 0`; NaN stays NaN.
///
/// `f32::signum` maps `0.0` to `1.0`, which would break continuity of
/// `symlog`/`symexp` at the origin.
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

#[inline]
pub fn relu(x: f32) -> f32 {
    // NaN propagates, unlike f32::max
    if x > 0.0 || x.is_nan() {
        x
    } else {
        0.0
    }
}

#[inline]
pub fn relu6(x: f32) -> f32 {
    x.clamp(0.0, 6.0)
}

#[inline]
pub fn elu(x: f32) -> f32 {
    if x > 0.0 {
        x
    } else {
        x.exp_m1()
    }
}

#[inline]
pub fn selu(x: f32) -> f32 {
    SELU_SCALE * elu_with_alpha(x, SELU_ALPHA)
}

#[inline]
fn elu_with_alpha(x: f32, alpha: f32) -> f32 {
    if x > 0.0 {
        x
    } else {
        alpha * x.exp_m1()
    }
}

/// `ln(1 + e^x)`, linear above the threshold.
#[inline]
pub fn softplus(x: f32) -> f32 {
    if x > SOFTPLUS_THRESHOLD {
        x
    } else {
        x.exp().ln_1p()
    }
}

/// `ln(sigmoid(x))`, evaluated without overflow for large `|x|`.
#[inline]
pub fn log_sigmoid(x: f32) -> f32 {
    x.min(0.0) - (-x.abs()).exp().ln_1p()
}

#[inline]
pub fn hardtanh(x: f32) -> f32 {
    x.clamp(-1.0, 1.0)
}

/// `x * relu6(x + 3) / 6`.
#[inline]
pub fn hardswish(x: f32) -> f32 {
    x * relu6(x + 3.0) / 6.0
}

/// `x * tanh(softplus(x))`.
#[inline]
pub fn mish(x: f32) -> f32 {
    x * softplus(x).tanh()
}

/// Piecewise-linear sigmoid approximation `clip(0.2x + 0.5, 0, 1)`.
#[inline]
pub fn hard_sigmoid(x: f32) -> f32 {
    (0.2 * x + 0.5).clamp(0.0, 1.0)
}

/// `x * sigmoid(x)`.
#[inline]
pub fn swish(x: f32) -> f32 {
    x * sigmoid(x)
}
