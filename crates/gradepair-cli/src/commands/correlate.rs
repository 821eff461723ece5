use std::path::PathBuf;

use gradepair_core::{Dataset, GradeVizError, check_grade_range, summarize};

pub fn run(selection: &str, pair_files: &[PathBuf]) {
    let datasets = super::select_or_exit(selection, pair_files);

    println!(
        "  {:<12} {:>6} {:>8} {:>8} {:>9}",
        "dataset", "n", "mean x", "mean y", "r"
    );
    println!("  {:-<47}", "");
    let mut failed = false;
    for ds in &datasets {
        match correlation_row(ds) {
            Ok(row) => println!("  {row}"),
            Err(e @ GradeVizError::ZeroVariance { .. }) => {
                println!("  {:<12} {:>6} undefined ({e})", ds.name(), ds.len());
            }
            Err(e) => {
                println!("  {:<12} {:>6} error: {e}", ds.name(), ds.len());
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// One formatted table row for a dataset. Pairs outside 0..=5 are rejected
/// the same way the grid builder rejects them.
fn correlation_row(ds: &Dataset) -> Result<String, GradeVizError> {
    check_grade_range(ds.pairs())?;
    let s = summarize(ds.pairs())?;
    Ok(format!(
        "{:<12} {:>6} {:>8.3} {:>8.3} {:>+9.4}",
        ds.name(),
        s.n,
        s.mean_x,
        s.mean_y,
        s.r
    ))
}
