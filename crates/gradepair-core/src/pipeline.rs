//! End-to-end processing of datasets: build, normalize, render, correlate.
//!
//! Each dataset is handled on its own and paints onto its own surface. The
//! only output besides the painted surface is a [`DatasetReport`].

use log::{debug, info, warn};
use serde::Serialize;

use crate::correlation;
use crate::error::{GradeVizError, Result};
use crate::grid::{CountGrid, WeightGrid};
use crate::pair::Dataset;
use crate::render::{Layout, draw_grid};
use crate::surface::Surface;

/// Correlation result as reported to callers: either a number or an explicit
/// reason why none exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CorrelationOutcome {
    Defined { r: f64 },
    Undefined { reason: String },
}

impl CorrelationOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            CorrelationOutcome::Defined { r } => Some(*r),
            CorrelationOutcome::Undefined { .. } => None,
        }
    }
}

/// Everything computed for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub name: String,
    pub pair_count: usize,
    pub counts: CountGrid,
    pub weights: WeightGrid,
    pub correlation: CorrelationOutcome,
}

impl DatasetReport {
    /// One human-readable line, e.g. `Old correlation: 0.4321`.
    pub fn message(&self) -> String {
        let label = capitalize(&self.name);
        match &self.correlation {
            CorrelationOutcome::Defined { r } => format!("{label} correlation: {r:.4}"),
            CorrelationOutcome::Undefined { reason } => {
                format!("{label} correlation: undefined ({reason})")
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Run the full pipeline for one dataset, painting onto `surface`.
///
/// Empty datasets and out-of-range pairs abort before anything is drawn.
/// A zero-variance dataset is still rendered; its correlation is reported as
/// [`CorrelationOutcome::Undefined`].
pub fn process_dataset<S: Surface + ?Sized>(
    dataset: &Dataset,
    layout: &Layout,
    surface: &mut S,
) -> Result<DatasetReport> {
    if dataset.is_empty() {
        return Err(GradeVizError::EmptyDataset {
            operation: "grid rendering",
        });
    }

    let counts = CountGrid::from_pairs(dataset.pairs())?;
    let weights = counts.normalized();
    debug!(
        "{}: max cell {} of {} pairs",
        dataset.name(),
        counts.max_cell(),
        counts.total()
    );

    draw_grid(&weights, layout, surface);

    let correlation = match correlation::pearson(dataset.pairs()) {
        Ok(r) => CorrelationOutcome::Defined { r },
        Err(e @ GradeVizError::ZeroVariance { .. }) => {
            warn!("{}: {e}", dataset.name());
            CorrelationOutcome::Undefined {
                reason: e.to_string(),
            }
        }
        Err(e) => return Err(e),
    };

    info!(
        "{}: {} pairs processed, r = {:?}",
        dataset.name(),
        dataset.len(),
        correlation.value()
    );

    Ok(DatasetReport {
        name: dataset.name().to_string(),
        pair_count: dataset.len(),
        counts,
        weights,
        correlation,
    })
}

/// Process every dataset against a fresh surface from `new_surface`.
///
/// Stops at the first failing dataset.
pub fn run_all<S, F>(
    datasets: &[Dataset],
    layout: &Layout,
    mut new_surface: F,
) -> Result<Vec<(DatasetReport, S)>>
where
    S: Surface,
    F: FnMut(&Dataset) -> S,
{
    let mut out = Vec::with_capacity(datasets.len());
    for dataset in datasets {
        let mut surface = new_surface(dataset);
        let report = process_dataset(dataset, layout, &mut surface)?;
        out.push((report, surface));
    }
    Ok(out)
}
