use ndarray::{ArrayBase, ArrayViewMut, Data, Dimension};

use crate::activations::Activation;
use crate::error::{Result, SafsError};

/// Types of numerical issues
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalIssue {
    NaN { count: usize },
    Infinity { count: usize },
    Overflow { count: usize },
}

/// Check an activation output for numerical issues, logging each kind found.
///
/// Division by a zero coefficient in `srs` or overflow in `symexp` only
/// shows up as non-finite values in the output.
pub fn check_output<S, D>(output: &ArrayBase<S, D>, activation: Activation) -> Vec<NumericalIssue>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    let mut issues = Vec::new();
    let mut nan_count = 0;
    let mut inf_count = 0;
    let mut overflow_count = 0;

    for &value in output.iter() {
        if value.is_nan() {
            nan_count += 1;
        } else if value.is_infinite() {
            inf_count += 1;
        } else if value.abs() > 1e38 {
            overflow_count += 1;
        }
    }

    if nan_count > 0 {
        issues.push(NumericalIssue::NaN { count: nan_count });
        log::warn!("{}: found {} NaN values in output", activation, nan_count);
    }
    if inf_count > 0 {
        issues.push(NumericalIssue::Infinity { count: inf_count });
        log::warn!("{}: found {} infinite values in output", activation, inf_count);
    }
    if overflow_count > 0 {
        issues.push(NumericalIssue::Overflow { count: overflow_count });
        log::warn!("{}: found {} overflow risk values in output", activation, overflow_count);
    }

    issues
}

/// Fail with [`SafsError::NumericalError`] if the output holds NaN or Inf.
pub fn ensure_finite<S, D>(output: &ArrayBase<S, D>, activation: Activation) -> Result<()>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    let non_finite = output.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        return Err(SafsError::NumericalError(format!(
            "{} produced {} non-finite values out of {}",
            activation,
            non_finite,
            output.len()
        )));
    }
    Ok(())
}

/// Sanitize an array by replacing NaN and Inf values
pub fn sanitize<D: Dimension>(mut array: ArrayViewMut<'_, f32, D>, nan_replacement: f32, inf_replacement: f32) {
    array.mapv_inplace(|x| {
        if x.is_nan() {
            nan_replacement
        } else if x.is_infinite() {
            if x.is_sign_positive() {
                inf_replacement
            } else {
                -inf_replacement
            }
        } else {
            x
        }
    });
}
