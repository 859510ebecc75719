//! Meta-ACON gate: the "activate or not" unit whose switching factor is
//! produced by a small channel-attention network.
//!
//! For a sample with `width` channels:
//!
//! ```text
//! beta = sigmoid(instance_norm(expand(reduce(x))))
//! d    = p1[c] * x - p2[c] * x
//! y    = d * sigmoid(beta[c] * d) + p2[c] * x
//! ```
//!
//! `reduce` and `expand` are 1x1 convolutions `width -> max(r, width / r)`
//! and back.

use ndarray::{Array, Array1, ArrayView, Dimension};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activations::primitives::sigmoid;
use crate::error::{Result, SafsError};
use crate::layers::conv::PointwiseConv;
use crate::layers::initialization::WeightInit;
use crate::layers::instance_norm::InstanceNorm;

/// Default channel reduction ratio.
pub const DEFAULT_REDUCTION: usize = 16;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MetaAcon {
    /// Channel reduction `width -> hidden`
    pub reduce: PointwiseConv,

    /// Channel expansion `hidden -> width`
    pub expand: PointwiseConv,

    /// Normalization of the expanded gate logits
    pub norm: InstanceNorm,

    /// Per-channel slope of the "activated" branch
    pub p1: Array1<f32>,

    /// Per-channel slope of the "not activated" branch
    pub p2: Array1<f32>,
}

impl MetaAcon {
    /// Hidden width of the gate for `width` channels and reduction `r`.
    pub fn hidden_width(width: usize, reduction: usize) -> usize {
        reduction.max(width / reduction)
    }

    /// Create a gate for `width` channels with randomly initialized
    /// projections and standard-normal `p1`/`p2`.
    pub fn new<R: Rng + ?Sized>(width: usize, reduction: usize, rng: &mut R) -> Result<Self> {
        if width == 0 {
            return Err(SafsError::invalid_parameter("width", "must be greater than 0"));
        }
        if reduction == 0 {
            return Err(SafsError::invalid_parameter("reduction", "must be greater than 0"));
        }
        let hidden = Self::hidden_width(width, reduction);
        let reduce = PointwiseConv::new(width, hidden, rng)?;
        let expand = PointwiseConv::new(hidden, width, rng)?;
        let p1 = WeightInit::standard_normal().initialize_vector(width, width, rng)?;
        let p2 = WeightInit::standard_normal().initialize_vector(width, width, rng)?;
        log::debug!("meta-acon gate: {} channels, hidden width {}", width, hidden);

        Ok(MetaAcon {
            reduce,
            expand,
            norm: InstanceNorm::default(),
            p1,
            p2,
        })
    }

    /// Build from explicit parameters.
    pub fn from_parts(
        reduce: PointwiseConv,
        expand: PointwiseConv,
        p1: Array1<f32>,
        p2: Array1<f32>,
    ) -> Result<Self> {
        let width = reduce.in_channels();
        if expand.in_channels() != reduce.out_channels() {
            return Err(SafsError::dimension_mismatch(
                format!("expand with {} input channels", reduce.out_channels()),
                format!("expand with {} input channels", expand.in_channels()),
            ));
        }
        for (name, len) in [
            ("expand output channels", expand.out_channels()),
            ("p1 length", p1.len()),
            ("p2 length", p2.len()),
        ] {
            if len != width {
                return Err(SafsError::dimension_mismatch(
                    format!("{} {}", name, width),
                    format!("{} {}", name, len),
                ));
            }
        }

        Ok(MetaAcon {
            reduce,
            expand,
            norm: InstanceNorm::default(),
            p1,
            p2,
        })
    }

    /// Number of channels the gate was built for.
    pub fn width(&self) -> usize {
        self.p1.len()
    }

    /// Per-channel switching factor `beta` for a flattened sample.
    pub fn gate(&self, channels: &Array1<f32>) -> Result<Array1<f32>> {
        let hidden = self.reduce.forward(channels.view())?;
        let logits = self.expand.forward(hidden.view())?;
        let width = logits.len();
        // a single row, normalized across the channels
        let logits = logits
            .into_shape((1, width))
            .map_err(|e| SafsError::dimension_mismatch(format!("{} gate logits", width), e.to_string()))?;
        let normalized = self.norm.forward(logits.view())?;
        Ok(normalized.row(0).mapv(sigmoid))
    }

    /// Apply the gate to one sample holding exactly `width` elements.
    ///
    /// The elements are taken in logical order as the channel vector; the
    /// output keeps the input's shape.
    pub fn forward<D: Dimension>(&self, x: ArrayView<'_, f32, D>) -> Result<Array<f32, D>> {
        if x.len() != self.width() {
            return Err(SafsError::dimension_mismatch(
                format!("{} elements (one sample of {} channels)", self.width(), self.width()),
                format!("{} elements with shape {:?}", x.len(), x.shape()),
            ));
        }
        let channels: Array1<f32> = x.iter().copied().collect();
        let beta = self.gate(&channels)?;

        let mut output = x.to_owned();
        for (((y, &b), &p1), &p2) in output
            .iter_mut()
            .zip(beta.iter())
            .zip(self.p1.iter())
            .zip(self.p2.iter())
        {
            let v = *y;
            let d = p1 * v - p2 * v;
            *y = d * sigmoid(b * d) + p2 * v;
        }
        Ok(output)
    }
}
