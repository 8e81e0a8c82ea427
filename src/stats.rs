//! Descriptive statistics over run durations.

use crate::Result;
use crate::diagnostics;

use anyhow::bail;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Min, max and arithmetic mean of `values`. Empty input is an error.
pub fn summarize(values: &[f64]) -> Result<Summary> {
    if values.is_empty() {
        bail!("{}", diagnostics::error_message("cannot summarize zero durations"));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }

    Ok(Summary {
        min,
        max,
        mean: mean(values),
    })
}

/// Mean rounded once from the exact sum, so the last printed digit does not
/// drift with summation order.
///
/// The sum is carried as `hi + lo` (Neumaier), then divided as a
/// double-double: `q = hi / n` plus the correction `(hi - q*n + lo) / n`.
fn mean(values: &[f64]) -> f64 {
    let mut hi = 0.0_f64;
    let mut lo = 0.0_f64;
    for &v in values {
        let t = hi + v;
        if hi.abs() >= v.abs() {
            lo += (hi - t) + v;
        } else {
            lo += (v - t) + hi;
        }
        hi = t;
    }

    let n = values.len() as f64;
    let q = hi / n;
    let rem = (-q).mul_add(n, hi) + lo;
    q + rem / n
}
