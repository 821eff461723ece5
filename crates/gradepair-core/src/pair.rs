//! Grade pairs and named datasets.
//!
//! A dataset is loaded once and never mutated afterwards: the matrix builder
//! and the correlation calculator only ever borrow its pairs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One paired observation. On the wire it is a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Pair {
    pub x: i32,
    pub y: i32,
}

impl Pair {
    pub const fn new(x: i32, y: i32) -> Self {
        Pair { x, y }
    }
}

impl From<[i32; 2]> for Pair {
    fn from([x, y]: [i32; 2]) -> Self {
        Pair { x, y }
    }
}

impl From<Pair> for [i32; 2] {
    fn from(p: Pair) -> Self {
        [p.x, p.y]
    }
}

impl From<(i32, i32)> for Pair {
    fn from((x, y): (i32, i32)) -> Self {
        Pair { x, y }
    }
}

/// A named, ordered sequence of pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    name: String,
    pairs: Vec<Pair>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, pairs: Vec<Pair>) -> Self {
        Dataset {
            name: name.into(),
            pairs,
        }
    }

    /// Build a dataset from `[x, y]` literals.
    pub fn from_literals(name: impl Into<String>, literals: &[[i32; 2]]) -> Self {
        Self::new(name, literals.iter().copied().map(Pair::from).collect())
    }

    /// Parse a JSON array of `[x, y]` arrays, e.g. `[[4, 4], [5, 1]]`.
    ///
    /// Values are not range-checked here; the matrix builder rejects
    /// anything outside the grade domain.
    pub fn from_json_str(name: impl Into<String>, json: &str) -> Result<Self> {
        let pairs: Vec<Pair> = serde_json::from_str(json)?;
        Ok(Self::new(name, pairs))
    }

    /// Load a dataset from a JSON file. The file stem becomes the name.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "pairs".to_string());
        Self::from_json_str(name, &text)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
