//! Canonical text identity of a teardrop zone
//!
//! A fingerprint is `<layer>:<corners>` where the corners are the `(x, y)`
//! strings of every corner, sorted as text and concatenated. Sorting makes the
//! key independent of the order corners were appended.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::draw::geometry::Point;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeFingerprint(String);

impl ShapeFingerprint {
    pub fn new(layer: &str, corners: &[Point]) -> Self {
        let mut parts: Vec<String> = corners.iter().map(|p| p.to_string()).collect();
        parts.sort();
        Self(format!("{}:{}", layer, parts.concat()))
    }

    /// Wrap a ledger line; trailing whitespace is not part of the key
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end();
        if line.is_empty() {
            None
        } else {
            Some(Self(line.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
