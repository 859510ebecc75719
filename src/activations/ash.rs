//! Activation shaping (ASH): per-sample percentile thresholding.
//!
//! Each sample along the leading axis gets its own threshold, the
//! percentile of that sample's values at rank `trunc((1 - k) * 100)`.
//! Values at or below the threshold are zeroed, the rest pass unchanged.

use ndarray::parallel::prelude::*;
use ndarray::{Array, ArrayView, Axis, Dimension};

use crate::error::{Result, SafsError};

/// Percentile rank in `[0, 100]` for a keep fraction `k`.
///
/// The rank is truncated toward zero after the `f32` multiplication, so
/// `k = 0.8` yields rank 19, not 20.
pub fn percentile_rank(k: f32) -> Result<u32> {
    if !k.is_finite() {
        return Err(SafsError::invalid_parameter(
            "k",
            format!("keep fraction must be finite, got {}", k),
        ));
    }
    let rank = ((1.0 - k) * 100.0).trunc();
    if !(0.0..=100.0).contains(&rank) {
        return Err(SafsError::invalid_parameter(
            "k",
            format!("keep fraction {} gives percentile rank {} outside [0, 100]", k, rank),
        ));
    }
    Ok(rank as u32)
}

/// Percentile of `values` at `rank` using linear interpolation between the
/// two closest order statistics.
///
/// Returns NaN when `values` is empty or contains a NaN.
pub fn percentile<'a, I>(values: I, rank: u32) -> f32
where
    I: IntoIterator<Item = &'a f32>,
{
    let mut sorted: Vec<f32> = values.into_iter().copied().collect();
    if sorted.is_empty() || sorted.iter().any(|v| v.is_nan()) {
        return f32::NAN;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let position = f64::from(rank) / 100.0 * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let lo = f64::from(sorted[lower]);
    let hi = f64::from(sorted[upper]);
    (lo + (hi - lo) * (position - lower as f64)) as f32
}

/// Zero every element of each leading-axis sample that is at or below the
/// sample's own percentile threshold.
///
/// A 1-D input is a batch of scalar samples; each is its own threshold and
/// is therefore zeroed.
pub fn ash<D: Dimension>(x: ArrayView<'_, f32, D>, k: f32) -> Result<Array<f32, D>> {
    if x.ndim() == 0 {
        return Err(SafsError::dimension_mismatch(
            "at least one batch axis",
            "0-d tensor",
        ));
    }
    let rank = percentile_rank(k)?;

    let mut output = x.to_owned().into_dyn();
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .for_each(|mut sample| {
            let threshold = percentile(sample.iter(), rank);
            // a NaN threshold compares false everywhere and leaves the sample as is
            sample.mapv_inplace(|v| if v <= threshold { 0.0 } else { v });
        });
    output
        .into_dimensionality::<D>()
        .map_err(|e| SafsError::dimension_mismatch(format!("{}-d output", x.ndim()), e.to_string()))
}
