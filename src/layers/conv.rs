//! Pointwise (1x1) convolution used by the gating sub-network.
//!
//! A 1x1 convolution mixes channels independently at every spatial
//! position, so on a single position it reduces to an affine projection
//! `W · x + b` over the channel vector.

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SafsError};
use crate::layers::initialization::WeightInit;

/// 1x1 convolution with bias.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PointwiseConv {
    /// Convolution kernels [out_channels, in_channels]
    pub kernels: Array2<f32>,

    /// Bias terms for each output channel
    pub biases: Array1<f32>,
}

impl PointwiseConv {
    /// Create a new pointwise convolution with framework-default
    /// initialization (uniform in `±1/sqrt(in_channels)` for kernels and
    /// biases).
    pub fn new<R: Rng + ?Sized>(in_channels: usize, out_channels: usize, rng: &mut R) -> Result<Self> {
        if in_channels == 0 || out_channels == 0 {
            return Err(SafsError::invalid_parameter(
                "channels",
                "channel counts must be greater than 0",
            ));
        }
        let init = WeightInit::FanInUniform;
        let kernels = init.initialize_weights((out_channels, in_channels), rng)?;
        let biases = init.initialize_vector(out_channels, in_channels, rng)?;
        Ok(PointwiseConv { kernels, biases })
    }

    /// Build from explicit parameters.
    pub fn from_parts(kernels: Array2<f32>, biases: Array1<f32>) -> Result<Self> {
        if kernels.nrows() != biases.len() {
            return Err(SafsError::dimension_mismatch(
                format!("{} biases", kernels.nrows()),
                format!("{} biases", biases.len()),
            ));
        }
        Ok(PointwiseConv { kernels, biases })
    }

    pub fn in_channels(&self) -> usize {
        self.kernels.ncols()
    }

    pub fn out_channels(&self) -> usize {
        self.kernels.nrows()
    }

    /// Apply to a single channel vector (one spatial position).
    pub fn forward(&self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        if input.len() != self.in_channels() {
            return Err(SafsError::dimension_mismatch(
                format!("{} input channels", self.in_channels()),
                format!("{} input channels", input.len()),
            ));
        }
        Ok(self.kernels.dot(&input) + &self.biases)
    }
}
