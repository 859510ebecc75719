use std::f32::consts::{FRAC_1_SQRT_2, PI};

/// GELU (Gaussian Error Linear Unit) activation function
pub struct Gelu;

impl Gelu {
    /// Exact form `x * Φ(x)` with Φ the standard-normal CDF.
    /// GELU(x) = 0.5 * x * (1 + erf(x / sqrt(2)))
    #[inline]
    pub fn exact(x: f32) -> f32 {
        0.5 * x * (1.0 + erf(x * FRAC_1_SQRT_2))
    }

    /// Approximation of GELU using tanh
    /// GELU(x) ≈ 0.5 * x * (1 + tanh(sqrt(2/π) * (x + 0.044715 * x^3)))
    #[inline]
    pub fn tanh_approx(x: f32) -> f32 {
        let sqrt_2_over_pi = (2.0_f32 / PI).sqrt();
        let inner = sqrt_2_over_pi * (x + 0.044715 * x.powi(3));
        0.5 * x * (1.0 + inner.tanh())
    }
}

/// Error function.
///
/// Abramowitz & Stegun 7.1.26 rational approximation evaluated in `f64`;
/// absolute error below 1.5e-7, which is under `f32` resolution near 1.
pub fn erf(x: f32) -> f32 {
    let x = x as f64;
    let t = 1.0 / (1.0 + 0.3275911 * x.abs());
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    let y = 1.0 - poly * (-(x * x)).exp();
    (if x >= 0.0 { y } else { -y }) as f32
}
