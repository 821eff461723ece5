pub mod correlate;
pub mod matrix;
pub mod render;

use std::path::PathBuf;

use gradepair_core::datasets;
use gradepair_core::{Dataset, GradeVizError, Result};

/// Initialize env_logger. `RUST_LOG` wins over the `--verbose` default.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Resolve `--dataset` plus any `--pairs` files into the datasets to process.
///
/// Embedded sets come first (old before new), then files in the order given.
/// Names must be unique: each dataset gets its own `<name>.svg`.
pub fn select_datasets(selection: &str, pair_files: &[PathBuf]) -> Result<Vec<Dataset>> {
    let mut out = match selection {
        "all" => datasets::builtin_datasets(),
        "none" => Vec::new(),
        name => datasets::builtin_by_name(name).into_iter().collect(),
    };
    for path in pair_files {
        let ds = Dataset::from_json_file(path)?;
        log::debug!("loaded {} pairs from {}", ds.len(), path.display());
        if out.iter().any(|d| d.name() == ds.name()) {
            return Err(GradeVizError::DuplicateDataset {
                name: ds.name().to_string(),
            });
        }
        out.push(ds);
    }
    Ok(out)
}

/// Same as [`select_datasets`], but exits the process on failure or when
/// nothing was selected.
pub fn select_or_exit(selection: &str, pair_files: &[PathBuf]) -> Vec<Dataset> {
    match select_datasets(selection, pair_files) {
        Ok(ds) if ds.is_empty() => {
            eprintln!("No datasets selected.");
            std::process::exit(1);
        }
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("Failed to load datasets: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // select_datasets tests
    // -----------------------------------------------------------------------

    #[test]
    fn test_select_all() {
        let ds = select_datasets("all", &[]).unwrap();
        let names: Vec<_> = ds.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["old", "new"]);
    }

    #[test]
    fn test_select_single() {
        let ds = select_datasets("new", &[]).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0].name(), "new");
    }

    #[test]
    fn test_select_none_without_files_is_empty() {
        assert!(select_datasets("none", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_select_appends_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.json");
        std::fs::write(&path, "[[0, 1], [2, 3]]").unwrap();

        let ds = select_datasets("old", &[path]).unwrap();
        let names: Vec<_> = ds.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["old", "extra"]);
        assert_eq!(ds[1].len(), 2);
    }

    #[test]
    fn test_select_rejects_file_named_like_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.json");
        std::fs::write(&path, "[[1, 1], [2, 2]]").unwrap();

        let err = select_datasets("all", &[path.clone()]).unwrap_err();
        assert!(matches!(err, GradeVizError::DuplicateDataset { ref name } if name == "old"));

        // Without the embedded "old" set the same file is accepted.
        let ds = select_datasets("new", &[path]).unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_select_rejects_two_files_with_same_stem() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        std::fs::create_dir_all(&a).unwrap();
        std::fs::create_dir_all(&b).unwrap();
        std::fs::write(a.join("spring.json"), "[[0, 0]]").unwrap();
        std::fs::write(b.join("spring.json"), "[[1, 1]]").unwrap();

        let err = select_datasets("none", &[a.join("spring.json"), b.join("spring.json")])
            .unwrap_err();
        assert!(matches!(err, GradeVizError::DuplicateDataset { .. }));
    }

    #[test]
    fn test_select_bad_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(select_datasets("none", &[path]).is_err());
    }
}
