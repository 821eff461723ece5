//! Pearson correlation of the x and y components of a pair sequence.

use serde::Serialize;

use crate::error::{Axis, GradeVizError, Result};
use crate::pair::Pair;

/// Correlation together with the statistics it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationSummary {
    pub n: usize,
    pub mean_x: f64,
    pub mean_y: f64,
    pub r: f64,
}

/// Mean of the x values, `None` for an empty slice.
pub fn mean_x(pairs: &[Pair]) -> Option<f64> {
    mean(pairs, |p| p.x)
}

/// Mean of the y values, `None` for an empty slice.
pub fn mean_y(pairs: &[Pair]) -> Option<f64> {
    mean(pairs, |p| p.y)
}

fn mean(pairs: &[Pair], component: impl Fn(&Pair) -> i32) -> Option<f64> {
    if pairs.is_empty() {
        return None;
    }
    let sum: f64 = pairs.iter().map(|p| component(p) as f64).sum();
    Some(sum / pairs.len() as f64)
}

/// Pearson's r for the pairs.
///
/// Errors with `EmptyDataset` for no pairs and with `ZeroVariance` when one
/// axis is constant.
pub fn pearson(pairs: &[Pair]) -> Result<f64> {
    summarize(pairs).map(|s| s.r)
}

/// Like [`pearson`], also returning sample size and means.
pub fn summarize(pairs: &[Pair]) -> Result<CorrelationSummary> {
    let empty = GradeVizError::EmptyDataset {
        operation: "correlation",
    };
    let (Some(mx), Some(my)) = (mean_x(pairs), mean_y(pairs)) else {
        return Err(empty);
    };

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for p in pairs {
        let dx = p.x as f64 - mx;
        let dy = p.y as f64 - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 {
        return Err(GradeVizError::ZeroVariance { axis: Axis::X });
    }
    if var_y == 0.0 {
        return Err(GradeVizError::ZeroVariance { axis: Axis::Y });
    }

    let r = (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0);
    Ok(CorrelationSummary {
        n: pairs.len(),
        mean_x: mx,
        mean_y: my,
        r,
    })
}
