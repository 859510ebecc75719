use ndarray::{Array1, Array2};
use rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::error::{Result, SafsError};

/// Weight initialization strategies
#[derive(Debug, Clone, PartialEq)]
pub enum WeightInit {
    /// Uniform in `±1/sqrt(fan_in)`, the default for convolution layers in
    /// most frameworks
    FanInUniform,

    /// Normal distribution with custom mean and std
    Normal { mean: f32, std: f32 },
}

impl WeightInit {
    /// Standard normal, used for per-channel gate coefficients.
    pub fn standard_normal() -> Self {
        WeightInit::Normal { mean: 0.0, std: 1.0 }
    }

    /// Initialize a `(fan_out, fan_in)` projection matrix
    pub fn initialize_weights<R: Rng + ?Sized>(
        &self,
        shape: (usize, usize),
        rng: &mut R,
    ) -> Result<Array2<f32>> {
        let fan_in = shape.1;
        Ok(match self {
            WeightInit::FanInUniform => {
                let limit = fan_in_bound(fan_in)?;
                Array2::random_using(shape, Uniform::new_inclusive(-limit, limit), rng)
            }
            WeightInit::Normal { mean, std } => {
                Array2::random_using(shape, normal(*mean, *std)?, rng)
            }
        })
    }

    /// Initialize a vector of `size` values. `fan_in` only matters for
    /// [`WeightInit::FanInUniform`], where biases share the weight bound.
    pub fn initialize_vector<R: Rng + ?Sized>(
        &self,
        size: usize,
        fan_in: usize,
        rng: &mut R,
    ) -> Result<Array1<f32>> {
        Ok(match self {
            WeightInit::FanInUniform => {
                let limit = fan_in_bound(fan_in)?;
                Array1::random_using(size, Uniform::new_inclusive(-limit, limit), rng)
            }
            WeightInit::Normal { mean, std } => {
                Array1::random_using(size, normal(*mean, *std)?, rng)
            }
        })
    }
}

fn fan_in_bound(fan_in: usize) -> Result<f32> {
    if fan_in == 0 {
        return Err(SafsError::invalid_parameter("fan_in", "must be greater than 0"));
    }
    Ok(1.0 / (fan_in as f32).sqrt())
}

fn normal(mean: f32, std: f32) -> Result<Normal<f32>> {
    // rand_distr only rejects a non-finite std
    if std.is_nan() || std < 0.0 {
        return Err(SafsError::invalid_parameter(
            "std",
            format!("standard deviation must be non-negative, got {}", std),
        ));
    }
    Normal::new(mean, std).map_err(|e| SafsError::invalid_parameter("normal", e.to_string()))
}
