//! Node diff: a position is replaced wholesale, never partially removed.

use std::fmt;

use geomdiff_types::{Node, Position};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::ApplyOptions;

/// The change to a node's position between two versions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDiff {
    null_move: bool,
    position: Position,
}

impl PointDiff {
    /// Diff two versions of a node.
    pub fn create(a: &Node, b: &Node) -> Self {
        Self::from_positions(a.position, b.position)
    }

    /// Diff two positions.
    pub fn from_positions(a: Position, b: Position) -> Self {
        let diff = Self {
            null_move: a == b,
            position: b,
        };
        debug!(null_move = diff.null_move, to = %b, "built point diff");
        diff
    }

    /// Returns `true` if the position did not change.
    pub fn is_null_move(&self) -> bool {
        self.null_move
    }

    /// The position in the "to" version.
    pub fn new_position(&self) -> Position {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.null_move
    }

    /// A move is never a deletion, so a point diff only deletes when it does
    /// nothing at all.
    pub fn only_deletes(&self) -> bool {
        self.null_move
    }

    /// Apply the diff to a current position.
    ///
    /// The deleted-only projection leaves the position untouched.
    pub fn apply(&self, current: Position, options: &ApplyOptions) -> Position {
        if self.null_move || options.is_deleted_only() {
            current
        } else {
            self.position
        }
    }
}

impl fmt::Display for PointDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointDiff[null_move={}, position={}]", self.null_move, self.position)
    }
}
