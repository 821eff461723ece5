use std::fmt::Write as _;
use std::path::PathBuf;

use gradepair_core::{CountGrid, GRID_SIZE};

pub fn run(selection: &str, pair_files: &[PathBuf], normalized: bool) {
    let datasets = super::select_or_exit(selection, pair_files);

    for ds in &datasets {
        let counts = match CountGrid::from_pairs(ds.pairs()) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("{}: {e}", ds.name());
                std::process::exit(1);
            }
        };
        println!("\n{:=<50}", "");
        println!("{} ({} pairs, max cell {})", ds.name(), ds.len(), counts.max_cell());
        println!("{:=<50}", "");
        print!("{}", format_table(&counts, normalized));
    }
}

/// Row 5 first, matching the rendered heatmap.
fn format_table(counts: &CountGrid, normalized: bool) -> String {
    let weights = counts.normalized();
    let mut out = String::new();
    for y in (0..GRID_SIZE).rev() {
        let _ = write!(out, "  {y} |");
        for x in 0..GRID_SIZE {
            if normalized {
                let _ = write!(out, " {:>5.2}", weights.get(x, y));
            } else {
                let _ = write!(out, " {:>5}", counts.get(x, y));
            }
        }
        out.push('\n');
    }
    let _ = write!(out, "    +{:-<36}\n     ", "");
    for x in 0..GRID_SIZE {
        let _ = write!(out, " {x:>5}");
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradepair_core::Pair;

    #[test]
    fn test_table_puts_row_five_on_top() {
        let grid = CountGrid::from_pairs(&[Pair::new(0, 0), Pair::new(0, 0), Pair::new(5, 5)])
            .unwrap();
        let table = format_table(&grid, false);
        let lines: Vec<_> = table.lines().collect();
        assert!(lines[0].starts_with("  5 |"));
        assert!(lines[0].ends_with("    1"));
        assert!(lines[5].starts_with("  0 |     2"));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_table_normalized() {
        let grid = CountGrid::from_pairs(&[Pair::new(0, 0), Pair::new(0, 0), Pair::new(5, 5)])
            .unwrap();
        let table = format_table(&grid, true);
        assert!(table.lines().next().unwrap().ends_with(" 0.50"));
        assert!(table.lines().nth(5).unwrap().starts_with("  0 |  1.00"));
    }
}
