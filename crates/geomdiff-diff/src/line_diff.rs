//! Way diff: the raw alignment of two node lists, replayed leniently.

use std::fmt;

use geomdiff_types::{NodeRef, Way};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::op::{write_ops, DiffOp};
use crate::options::ApplyOptions;
use crate::sequence::diff_slices;

/// The change to an ordered sequence between two versions.
///
/// Defaults to a way's node list, but any equality-comparable element works.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff<T = NodeRef> {
    ops: Vec<DiffOp<T>>,
}

impl LineDiff<NodeRef> {
    /// Diff two versions of a way.
    pub fn create(a: &Way, b: &Way) -> Self {
        Self::from_sequences(&a.nodes, &b.nodes)
    }
}

impl<T> LineDiff<T>
where
    T: PartialEq + Clone,
{
    /// Diff two sequences.
    pub fn from_sequences(a: &[T], b: &[T]) -> Self {
        let diff = Self {
            ops: diff_slices(a, b),
        };
        debug!(
            ops = diff.ops.len(),
            deletions = diff.deletions(),
            additions = diff.additions(),
            "built line diff"
        );
        diff
    }

    /// The recorded operations, in alignment order.
    pub fn ops(&self) -> &[DiffOp<T>] {
        &self.ops
    }

    /// Returns `true` if every op is a keep.
    pub fn is_empty(&self) -> bool {
        self.ops.iter().all(DiffOp::is_keep)
    }

    /// Returns `true` if nothing is inserted.
    pub fn only_deletes(&self) -> bool {
        !self.ops.iter().any(DiffOp::is_insert)
    }

    /// Number of inserted elements.
    pub fn additions(&self) -> usize {
        self.ops.iter().filter(|op| op.is_insert()).count()
    }

    /// Number of deleted elements.
    pub fn deletions(&self) -> usize {
        self.ops.iter().filter(|op| op.is_delete()).count()
    }

    /// Replay the diff against `current`.
    ///
    /// A delete or keep whose element is not under the cursor is treated as
    /// already removed: the cursor stays put and nothing is emitted.
    pub fn apply(&self, current: &[T], options: &ApplyOptions) -> Vec<T> {
        let mut cursor = Cursor::new(current);
        let mut out = Vec::with_capacity(current.len());

        for op in &self.ops {
            match op {
                DiffOp::Delete(e) => {
                    if !cursor.take_if(e) {
                        trace!(at = cursor.position(), "delete target absent, skipping");
                    }
                }
                DiffOp::Insert(e) => {
                    if !options.is_deleted_only() {
                        out.push(e.clone());
                    }
                }
                DiffOp::Keep(e) => {
                    if cursor.take_if(e) {
                        out.push(e.clone());
                    } else {
                        trace!(at = cursor.position(), "keep target absent, skipping");
                    }
                }
            }
        }

        out
    }
}

impl<T: fmt::Display> fmt::Display for LineDiff<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LineDiff")?;
        write_ops(f, &self.ops)
    }
}
