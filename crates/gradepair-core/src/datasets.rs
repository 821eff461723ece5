//! Grade pairs shipped with the binary.
//!
//! Each entry is one `[x, y]` grade pair on the 0..=5 scale. There are two
//! independent sets, "old" and "new", rendered and correlated separately.

use crate::pair::Dataset;

/// Name of the dataset built from [`OLD_GRADE_PAIRS`].
pub const OLD_DATASET_NAME: &str = "old";
/// Name of the dataset built from [`NEW_GRADE_PAIRS`].
pub const NEW_DATASET_NAME: &str = "new";

/// The "old" grade pairs.
pub const OLD_GRADE_PAIRS: &[[i32; 2]] = &[
    [4, 4], [4, 5], [5, 5], [0, 3], [1, 5], [5, 0], [5, 4], [5, 5], [5, 5], [5, 1], [4, 1], [2, 3],
    [3, 4], [4, 4], [5, 5], [5, 4], [5, 0], [5, 5], [0, 1], [2, 2], [0, 0], [5, 1], [3, 0], [4, 3],
    [5, 4], [1, 0], [4, 5], [4, 1], [3, 2], [5, 5], [3, 5], [5, 3], [4, 0], [3, 0], [1, 2], [5, 4],
    [5, 4], [5, 5], [2, 1], [5, 2], [2, 1], [5, 0], [5, 5], [2, 2], [4, 5], [1, 2], [2, 3], [3, 5],
    [3, 2], [3, 5], [5, 4], [4, 1], [3, 5], [2, 1], [2, 0], [0, 0], [0, 0], [3, 4], [3, 0], [4, 3],
    [5, 2], [3, 5], [4, 1], [1, 1], [5, 0], [1, 0], [1, 2], [0, 3], [5, 0], [5, 0], [5, 3], [5, 0],
    [4, 4], [5, 5], [2, 1],
];

/// The "new" grade pairs.
pub const NEW_GRADE_PAIRS: &[[i32; 2]] = &[
    [5, 1], [4, 4], [4, 5], [5, 4], [5, 5], [2, 2], [3, 0], [5, 4], [4, 1], [3, 4], [3, 0], [4, 3],
    [5, 3], [5, 5], [5, 5], [5, 5], [5, 4], [4, 4], [5, 1], [5, 5], [4, 5], [1, 1], [5, 4], [5, 5],
    [3, 2], [3, 2], [4, 5], [5, 3], [5, 4], [2, 0], [3, 0], [5, 5], [5, 5], [4, 5], [2, 3], [5, 4],
    [4, 2], [5, 3], [5, 2], [3, 5], [4, 5], [2, 4], [5, 3], [5, 3], [5, 5], [5, 5], [5, 4], [5, 4],
    [5, 5], [3, 5], [5, 5], [4, 5], [3, 3], [5, 4], [0, 3], [5, 2], [5, 3], [5, 4], [2, 3], [4, 5],
    [2, 1], [4, 2], [4, 5], [4, 4], [4, 4], [5, 5], [5, 4], [4, 5], [5, 5], [5, 5], [5, 5], [4, 3],
    [5, 5], [4, 4], [4, 5], [5, 5], [5, 5], [5, 1], [5, 5], [4, 5], [5, 4], [4, 1], [5, 3], [4, 5],
    [4, 3], [5, 4], [3, 5], [5, 4], [5, 5], [5, 5], [5, 5], [5, 4], [5, 5], [5, 5], [4, 4], [5, 5],
    [5, 4], [4, 4], [5, 5], [5, 4], [5, 5], [5, 5], [4, 5], [5, 5], [5, 5], [5, 0], [1, 0], [5, 3],
    [5, 3], [5, 5], [5, 5], [2, 2], [5, 3], [5, 5], [5, 4], [5, 5], [4, 5], [5, 5], [5, 5], [4, 5],
    [0, 0], [5, 0], [2, 2], [5, 5], [5, 4], [5, 1], [5, 4], [4, 5], [5, 4], [4, 3], [4, 5], [4, 2],
    [4, 3], [5, 1], [4, 4], [4, 5], [5, 0], [4, 4], [5, 5], [1, 1], [5, 1], [4, 3], [5, 4], [2, 1],
    [5, 5], [5, 5], [2, 3], [3, 0], [5, 3], [3, 2], [4, 1], [1, 4], [5, 2], [5, 2], [3, 2], [0, 0],
    [3, 2], [1, 4], [2, 5], [4, 5], [5, 2], [3, 5], [5, 4], [4, 4], [5, 5], [3, 5], [3, 4], [4, 4],
    [5, 4], [1, 1], [5, 4], [5, 1], [5, 3], [3, 3], [1, 4], [5, 3], [4, 5], [4, 5], [2, 4], [4, 1],
    [5, 5], [5, 4], [5, 3], [4, 3], [5, 5], [5, 5], [5, 5], [4, 4], [5, 5], [5, 5], [5, 4], [5, 5],
    [5, 4], [5, 5], [5, 5], [5, 5], [5, 5], [5, 5], [4, 4], [5, 5], [4, 5], [4, 5], [5, 5], [5, 2],
    [5, 5], [5, 5], [5, 5], [5, 5], [4, 4], [5, 5], [5, 5], [5, 5], [5, 5], [5, 4], [5, 4], [5, 5],
    [5, 5], [5, 5], [5, 4], [2, 1], [5, 5], [5, 5], [4, 5], [5, 5], [5, 5], [4, 5], [5, 4], [5, 4],
    [5, 5], [4, 5], [3, 5], [5, 5], [4, 2], [0, 1], [4, 2], [3, 4], [3, 3], [5, 4], [5, 4], [5, 5],
    [5, 4], [5, 2], [5, 5], [4, 4], [5, 5], [4, 4], [4, 5], [3, 2], [5, 4], [5, 4], [4, 5], [3, 2],
    [2, 1], [4, 5], [5, 4], [0, 4], [2, 0], [5, 5], [5, 4], [1, 3], [2, 0], [3, 3], [4, 2], [4, 4],
    [4, 3], [4, 5], [5, 5], [2, 4], [2, 1], [5, 3], [5, 3], [3, 5], [5, 5], [3, 1], [5, 4], [4, 3],
    [5, 5], [4, 4], [5, 5], [5, 5], [5, 5], [5, 5], [5, 4], [4, 4], [3, 4], [5, 4], [5, 0], [4, 5],
    [5, 4], [3, 2], [5, 3], [5, 5], [4, 5], [5, 5], [5, 5], [4, 3], [4, 5], [5, 5], [5, 4], [5, 1],
    [2, 2], [3, 4], [5, 5], [5, 4], [4, 3], [5, 3], [5, 5], [4, 5], [5, 5], [3, 3], [5, 4], [4, 3],
    [5, 3], [4, 4], [4, 3], [5, 0], [4, 5], [5, 3], [5, 4], [4, 4], [5, 4], [5, 4], [2, 4], [5, 5],
    [4, 4], [4, 2], [5, 5], [1, 2], [5, 3], [3, 4], [5, 4], [2, 5], [5, 1], [4, 4], [5, 5], [1, 5],
    [5, 3], [5, 4], [2, 4], [5, 5], [4, 2], [4, 3], [5, 5], [4, 4], [1, 2], [5, 4], [5, 5], [1, 2],
    [5, 4], [3, 5], [5, 5], [4, 4], [5, 5], [5, 4], [5, 5], [5, 5], [4, 5], [5, 2], [4, 0], [4, 4],
    [2, 2], [4, 1], [5, 5], [4, 0], [5, 5], [4, 2], [2, 1], [3, 0],
];

/// The embedded "old" dataset.
pub fn old_dataset() -> Dataset {
    Dataset::from_literals(OLD_DATASET_NAME, OLD_GRADE_PAIRS)
}

/// The embedded "new" dataset.
pub fn new_dataset() -> Dataset {
    Dataset::from_literals(NEW_DATASET_NAME, NEW_GRADE_PAIRS)
}

/// Both embedded datasets, old first.
pub fn builtin_datasets() -> Vec<Dataset> {
    vec![old_dataset(), new_dataset()]
}

/// Look up an embedded dataset by name (case-insensitive).
pub fn builtin_by_name(name: &str) -> Option<Dataset> {
    match name.to_ascii_lowercase().as_str() {
        OLD_DATASET_NAME => Some(old_dataset()),
        NEW_DATASET_NAME => Some(new_dataset()),
        _ => None,
    }
}
