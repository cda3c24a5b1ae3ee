//! Sequence alignment.
//!
//! Uses the `similar` crate (Myers diff algorithm) to align two ordered
//! sequences, then flattens the result into one [`DiffOp`] per element.
//! Inside each change hunk all deletions come first, in source order, followed
//! by all insertions, in target order.

use similar::algorithms::{myers, Capture};
use similar::DiffOp as RawOp;

use crate::op::DiffOp;

/// Align `old` against `new`.
///
/// Replaying the `Delete`/`Keep` ops yields `old`; replaying the
/// `Keep`/`Insert` ops yields `new`.
pub fn diff_slices<T>(old: &[T], new: &[T]) -> Vec<DiffOp<T>>
where
    T: PartialEq + Clone,
{
    let mut capture = Capture::new();
    if let Err(never) = myers::diff(&mut capture, old, 0..old.len(), new, 0..new.len()) {
        match never {}
    }

    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    let mut hunk = Hunk::default();

    for raw in capture.into_ops() {
        match raw {
            RawOp::Equal { old_index, len, .. } => {
                hunk.flush_into(&mut ops);
                ops.extend(
                    old[old_index..old_index + len]
                        .iter()
                        .cloned()
                        .map(DiffOp::Keep),
                );
            }
            RawOp::Delete {
                old_index, old_len, ..
            } => hunk
                .deleted
                .extend_from_slice(&old[old_index..old_index + old_len]),
            RawOp::Insert {
                new_index, new_len, ..
            } => hunk
                .inserted
                .extend_from_slice(&new[new_index..new_index + new_len]),
            RawOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                hunk.deleted
                    .extend_from_slice(&old[old_index..old_index + old_len]);
                hunk.inserted
                    .extend_from_slice(&new[new_index..new_index + new_len]);
            }
        }
    }
    hunk.flush_into(&mut ops);

    ops
}

/// Changes accumulated between two runs of equal elements.
struct Hunk<T> {
    deleted: Vec<T>,
    inserted: Vec<T>,
}

impl<T> Default for Hunk<T> {
    fn default() -> Self {
        Self {
            deleted: Vec::new(),
            inserted: Vec::new(),
        }
    }
}

impl<T> Hunk<T> {
    fn flush_into(&mut self, ops: &mut Vec<DiffOp<T>>) {
        ops.extend(self.deleted.drain(..).map(DiffOp::Delete));
        ops.extend(self.inserted.drain(..).map(DiffOp::Insert));
    }
}
