//! # gradepair-core
//!
//! Co-occurrence heatmaps and Pearson correlation for paired grades.
//!
//! Every input is a sequence of `(x, y)` pairs with both values on the
//! 0..=5 scale. The crate counts them into a 6×6 grid, rescales the grid so
//! its largest cell is 1, paints it white-to-blue onto a [`Surface`], and
//! computes Pearson's r for the raw pairs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gradepair_core::{Layout, SvgSurface, datasets, process_dataset};
//!
//! let layout = Layout::default();
//! let mut surface = SvgSurface::new(layout.canvas_width, layout.canvas_height);
//! let report = process_dataset(&datasets::old_dataset(), &layout, &mut surface).unwrap();
//! println!("{}", report.message());
//! surface.save("old.svg".as_ref()).unwrap();
//! ```
//!
//! ## Architecture
//!
//! Dataset → CountGrid → WeightGrid (normalized) → Surface, plus
//! Dataset → Pearson r. The two branches share nothing but the input.

pub mod color;
pub mod correlation;
pub mod datasets;
pub mod error;
pub mod grid;
pub mod pair;
pub mod pipeline;
pub mod render;
pub mod surface;

pub use color::{Rgb, weight_to_color};
pub use correlation::{CorrelationSummary, pearson, summarize};
pub use error::{Axis, GradeVizError, Result};
pub use grid::{CountGrid, GRID_SIZE, MAX_GRADE, WeightGrid, check_grade_range};
pub use pair::{Dataset, Pair};
pub use pipeline::{CorrelationOutcome, DatasetReport, process_dataset, run_all};
pub use render::{Layout, draw_grid};
pub use surface::{DrawOp, Font, Rect, RecordingSurface, Surface, SvgSurface};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
