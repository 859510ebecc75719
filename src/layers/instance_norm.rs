use ndarray::{Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SafsError};

/// Instance Normalization Layer
///
/// Normalizes every row of a `[channels, length]` input to mean 0 and
/// variance 1 along its length. No running statistics are kept, so
/// training and inference behave the same.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InstanceNorm {
    /// Small constant for numerical stability
    pub epsilon: f32,
}

impl InstanceNorm {
    pub fn new(epsilon: f32) -> Self {
        InstanceNorm { epsilon }
    }

    /// Normalize each row of `inputs` along its length.
    pub fn forward(&self, inputs: ArrayView2<f32>) -> Result<Array2<f32>> {
        let length = inputs.ncols();
        if length == 0 {
            return Err(SafsError::dimension_mismatch("non-empty rows", "rows of length 0"));
        }

        let mut output = inputs.to_owned();
        for mut row in output.axis_iter_mut(Axis(0)) {
            let mean = row.sum() / length as f32;
            // biased variance, as in batch statistics
            let var = row.mapv(|v| (v - mean).powi(2)).sum() / length as f32;
            let std = (var + self.epsilon).sqrt();
            row.mapv_inplace(|v| (v - mean) / std);
        }
        Ok(output)
    }
}

impl Default for InstanceNorm {
    fn default() -> Self {
        InstanceNorm::new(1e-5)
    }
}
