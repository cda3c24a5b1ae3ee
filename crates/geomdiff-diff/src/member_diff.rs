//! Relation diff: member alignment with role-move compaction.
//!
//! The raw alignment of two member lists reports a member whose role changed
//! as a delete of the old triple plus an insert of the new one. Construction
//! walks the raw ops once and pairs such deletes and inserts into a single
//! [`RoleMove`], as long as both fall inside the same change hunk (no keep
//! between them).
//!
//! # Invariants
//!
//! - Every member of either version appears in exactly one op.
//! - Pairing is first-match in buffer order; each buffered op pairs at most
//!   once.
//! - A move takes the position of whichever half of the pair came later.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use geomdiff_types::{ElementType, Member, Relation};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::op::{write_ops, DiffOp, MemberOp, RoleMove};
use crate::options::{ApplyOptions, DiffConfig, MemberMatching};
use crate::sequence::diff_slices;

/// The change to a relation's member list between two versions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipDiff {
    ops: Vec<MemberOp>,
}

impl MembershipDiff {
    /// Diff two versions of a relation.
    pub fn create(a: &Relation, b: &Relation) -> Self {
        Self::create_with_config(a, b, &DiffConfig::default())
    }

    /// Diff two versions of a relation with an explicit configuration.
    pub fn create_with_config(a: &Relation, b: &Relation, config: &DiffConfig) -> Self {
        Self::from_members(&a.members, &b.members, config)
    }

    /// Diff two member lists.
    pub fn from_members(a: &[Member], b: &[Member], config: &DiffConfig) -> Self {
        let raw = diff_slices(a, b);
        let diff = Self {
            ops: compact(raw, config.member_matching),
        };
        debug!(
            ops = diff.ops.len(),
            deletions = diff.deletions(),
            additions = diff.additions(),
            moves = diff.moves(),
            matching = ?config.member_matching,
            "built membership diff"
        );
        diff
    }

    /// The recorded operations.
    pub fn ops(&self) -> &[MemberOp] {
        &self.ops
    }

    /// Returns `true` if every op is a keep.
    pub fn is_empty(&self) -> bool {
        self.ops.iter().all(MemberOp::is_keep)
    }

    /// Returns `true` if full application adds nothing the deleted-only
    /// projection would not: no inserts and no role moves.
    pub fn only_deletes(&self) -> bool {
        !self.ops.iter().any(MemberOp::adds_content)
    }

    /// Number of inserted members.
    pub fn additions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, MemberOp::Insert(_)))
            .count()
    }

    /// Number of deleted members.
    pub fn deletions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, MemberOp::Delete(_)))
            .count()
    }

    /// Number of role moves.
    pub fn moves(&self) -> usize {
        self.ops.iter().filter(|op| op.is_move()).count()
    }

    /// Replay the diff against `current`.
    ///
    /// Deletes, inserts, and keeps behave as in
    /// [`LineDiff::apply`](crate::LineDiff::apply). A role move emits the
    /// member under its new role, or under its old role in the deleted-only
    /// projection.
    ///
    /// When a move's old member is not under the cursor it is owed to the
    /// current hunk: the cursor passes over it when it turns up before the
    /// next keep, re-emitting it in the deleted-only projection. An owed
    /// member that never turns up is dropped in full application and
    /// emitted at the end of the hunk in the deleted-only projection.
    pub fn apply(&self, current: &[Member], options: &ApplyOptions) -> Vec<Member> {
        let mut replay = Replay::new(current, options.is_deleted_only());

        for op in &self.ops {
            match op {
                MemberOp::Delete(m) => {
                    if !replay.cursor.take_if(m) {
                        trace!(member = %m, "delete target absent, skipping");
                    }
                }
                MemberOp::Insert(m) => {
                    if !replay.deleted_only {
                        replay.out.push(m.clone());
                    }
                }
                MemberOp::Keep(m) => {
                    replay.settle_owed();
                    if replay.cursor.take_if(m) {
                        replay.out.push(m.clone());
                    } else {
                        trace!(member = %m, "keep target absent, skipping");
                    }
                }
                MemberOp::Move(mv) => replay.apply_move(mv),
            }
            replay.collect_owed();
        }
        replay.settle_owed();

        replay.out
    }
}

impl fmt::Display for MembershipDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MembershipDiff")?;
        write_ops(f, &self.ops)
    }
}

// ---------------------------------------------------------------
// Construction
// ---------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Side {
    Deleted,
    Inserted,
}

impl Side {
    fn of(op: &DiffOp<Member>) -> Self {
        if op.is_delete() {
            Self::Deleted
        } else {
            Self::Inserted
        }
    }

    fn opposite(self) -> Self {
        match self {
            Self::Deleted => Self::Inserted,
            Self::Inserted => Self::Deleted,
        }
    }
}

type PendingKey = (ElementType, i64, Side);

/// Unmatched deletes and inserts of the current hunk, in arrival order.
///
/// Matched entries are tombstoned rather than shifted out, so slot numbers
/// stay valid for the optional index.
#[derive(Debug)]
struct PendingBuffer {
    slots: Vec<Option<DiffOp<Member>>>,
    index: Option<HashMap<PendingKey, VecDeque<usize>>>,
}

impl PendingBuffer {
    fn new(matching: MemberMatching) -> Self {
        Self {
            slots: Vec::new(),
            index: match matching {
                MemberMatching::Scan => None,
                MemberMatching::Indexed => Some(HashMap::new()),
            },
        }
    }

    fn push(&mut self, op: DiffOp<Member>) {
        let slot = self.slots.len();
        if let Some(index) = &mut self.index {
            let m = op.element();
            index
                .entry((m.element_type, m.element_ref, Side::of(&op)))
                .or_default()
                .push_back(slot);
        }
        self.slots.push(Some(op));
    }

    /// Remove and return the first buffered member from the opposite side
    /// of `op` that references the same element under a different role.
    fn take_counterpart(&mut self, op: &DiffOp<Member>) -> Option<Member> {
        let wanted = Side::of(op).opposite();
        let member = op.element();
        let slot = match &mut self.index {
            None => self.slots.iter().position(|slot| {
                slot.as_ref().is_some_and(|p| {
                    Side::of(p) == wanted
                        && p.element().same_target(member)
                        && p.element().role != member.role
                })
            })?,
            Some(index) => {
                let queue = index.get_mut(&(member.element_type, member.element_ref, wanted))?;
                let at = queue.iter().position(|&slot| {
                    self.slots[slot]
                        .as_ref()
                        .is_some_and(|p| p.element().role != member.role)
                })?;
                queue.remove(at)?
            }
        };
        self.slots[slot].take().map(|p| p.element().clone())
    }

    fn flush_into(&mut self, ops: &mut Vec<MemberOp>) {
        ops.extend(self.slots.drain(..).flatten().map(MemberOp::from));
        if let Some(index) = &mut self.index {
            index.clear();
        }
    }
}

/// Fold delete/insert pairs of the same element into role moves.
fn compact(raw: Vec<DiffOp<Member>>, matching: MemberMatching) -> Vec<MemberOp> {
    let mut ops = Vec::with_capacity(raw.len());
    let mut pending = PendingBuffer::new(matching);

    for op in raw {
        if let DiffOp::Keep(m) = op {
            pending.flush_into(&mut ops);
            ops.push(MemberOp::Keep(m));
            continue;
        }
        match pending.take_counterpart(&op) {
            Some(matched) => {
                let (deleted, inserted) = match &op {
                    DiffOp::Delete(m) => (m, &matched),
                    _ => (&matched, op.element()),
                };
                ops.push(role_move(deleted, inserted));
            }
            None => pending.push(op),
        }
    }
    pending.flush_into(&mut ops);

    ops
}

fn role_move(deleted: &Member, inserted: &Member) -> MemberOp {
    debug!(member = %deleted, role_to = %inserted.role, "detected role move");
    MemberOp::Move(RoleMove::between(deleted, inserted))
}

// ---------------------------------------------------------------
// Application
// ---------------------------------------------------------------

struct Replay<'a> {
    cursor: Cursor<'a, Member>,
    out: Vec<Member>,
    /// Old members of moves in this hunk not yet found under the cursor.
    owed: Vec<Member>,
    deleted_only: bool,
}

impl<'a> Replay<'a> {
    fn new(current: &'a [Member], deleted_only: bool) -> Self {
        Self {
            cursor: Cursor::new(current),
            out: Vec::with_capacity(current.len()),
            owed: Vec::new(),
            deleted_only,
        }
    }

    fn apply_move(&mut self, mv: &RoleMove) {
        let from = mv.from_member();
        if self.cursor.take_if(&from) {
            if self.deleted_only {
                self.out.push(from);
            }
        } else {
            trace!(member = %from, "moved member not under cursor, deferring");
            self.owed.push(from);
        }
        if !self.deleted_only {
            self.out.push(mv.to_member());
        }
    }

    /// Pass over owed members sitting under the cursor.
    fn collect_owed(&mut self) {
        while let Some(next) = self.cursor.peek() {
            let Some(at) = self.owed.iter().position(|m| m == next) else {
                break;
            };
            let member = self.owed.remove(at);
            self.cursor.advance();
            if self.deleted_only {
                self.out.push(member);
            }
        }
    }

    /// Close the hunk: owed members that never turned up are already gone.
    fn settle_owed(&mut self) {
        if self.owed.is_empty() {
            return;
        }
        trace!(count = self.owed.len(), "moved members absent from hunk");
        if self.deleted_only {
            self.out.append(&mut self.owed);
        } else {
            self.owed.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn way(r: i64, role: &str) -> Member {
        Member::new(ElementType::Way, r, role)
    }

    fn node(r: i64, role: &str) -> Member {
        Member::new(ElementType::Node, r, role)
    }

    fn mv(t: ElementType, r: i64, from: &str, to: &str) -> MemberOp {
        MemberOp::Move(RoleMove {
            element_type: t,
            element_ref: r,
            role_from: from.into(),
            role_to: to.into(),
        })
    }

    fn build(a: &[Member], b: &[Member]) -> MembershipDiff {
        MembershipDiff::from_members(a, b, &DiffConfig::default())
    }

    #[test]
    fn identical_relations_are_empty() {
        let members = vec![way(1, "outer"), way(2, "inner"), node(3, "label")];
        let diff = build(&members, &members);
        assert!(diff.is_empty());
        assert!(diff.only_deletes());
        assert_eq!(diff.apply(&members, &ApplyOptions::full()), members);
    }

    #[test]
    fn role_swap_compacts_to_two_moves() {
        let a = vec![way(1, "outer"), way(2, "inner")];
        let b = vec![way(2, "outer"), way(1, "inner")];
        let diff = build(&a, &b);

        assert_eq!(
            diff.ops(),
            &[
                mv(ElementType::Way, 2, "inner", "outer"),
                mv(ElementType::Way, 1, "outer", "inner"),
            ]
        );
        assert_eq!(diff.moves(), 2);
        assert_eq!(diff.additions(), 0);
        assert_eq!(diff.deletions(), 0);
        assert_eq!(diff.apply(&a, &ApplyOptions::full()), b);
    }

    #[test]
    fn role_swap_deleted_only_is_identity() {
        let a = vec![way(1, "outer"), way(2, "inner")];
        let b = vec![way(2, "outer"), way(1, "inner")];
        let diff = build(&a, &b);
        assert!(!diff.only_deletes());
        assert_eq!(diff.apply(&a, &ApplyOptions::deleted_only()), a);
    }

    #[test]
    fn single_role_change_between_keeps() {
        let a = vec![node(1, "stop"), way(2, "outer"), way(3, "platform")];
        let b = vec![node(1, "stop"), way(2, "inner"), way(3, "platform")];
        let diff = build(&a, &b);

        assert_eq!(
            diff.ops(),
            &[
                MemberOp::Keep(node(1, "stop")),
                mv(ElementType::Way, 2, "outer", "inner"),
                MemberOp::Keep(way(3, "platform")),
            ]
        );
        assert_eq!(diff.apply(&a, &ApplyOptions::full()), b);
        assert_eq!(diff.apply(&a, &ApplyOptions::deleted_only()), a);
    }

    #[test]
    fn deletions_and_moves_mixed() {
        let a = vec![way(1, "outer"), node(9, "label"), way(2, "inner")];
        let b = vec![way(1, "inner")];
        let diff = build(&a, &b);

        assert_eq!(diff.moves(), 1);
        assert_eq!(diff.deletions(), 2);
        assert_eq!(diff.apply(&a, &ApplyOptions::full()), b);
        assert_eq!(
            diff.apply(&a, &ApplyOptions::deleted_only()),
            vec![way(1, "outer")]
        );
    }

    #[test]
    fn moved_member_behind_a_deletion_is_not_stranded() {
        let a = vec![node(5, ""), way(1, "outer"), way(7, "inner")];
        let b = vec![way(1, "inner"), way(7, "inner")];
        let diff = build(&a, &b);

        assert_eq!(
            diff.ops(),
            &[
                mv(ElementType::Way, 1, "outer", "inner"),
                MemberOp::Delete(node(5, "")),
                MemberOp::Keep(way(7, "inner")),
            ]
        );
        assert_eq!(diff.apply(&a, &ApplyOptions::full()), b);
        assert_eq!(
            diff.apply(&a, &ApplyOptions::deleted_only()),
            vec![way(1, "outer"), way(7, "inner")]
        );
    }

    #[test]
    fn different_element_types_never_pair() {
        let a = vec![way(1, "outer")];
        let b = vec![node(1, "inner")];
        let diff = build(&a, &b);
        assert_eq!(diff.moves(), 0);
        assert_eq!(
            diff.ops(),
            &[
                MemberOp::Delete(way(1, "outer")),
                MemberOp::Insert(node(1, "inner")),
            ]
        );
    }

    #[test]
    fn lenient_when_deleted_member_already_gone() {
        let a = vec![way(1, "outer"), node(2, "label"), way(3, "inner")];
        let b = vec![way(1, "outer"), way(3, "inner"), node(4, "admin_centre")];
        let diff = build(&a, &b);

        let already_removed = vec![way(1, "outer"), way(3, "inner")];
        assert_eq!(
            diff.apply(&already_removed, &ApplyOptions::full()),
            diff.apply(&a, &ApplyOptions::full())
        );
        assert_eq!(
            diff.apply(&already_removed, &ApplyOptions::deleted_only()),
            diff.apply(&a, &ApplyOptions::deleted_only())
        );
    }

    #[test]
    fn lenient_when_moved_member_already_gone() {
        let a = vec![way(1, "outer"), way(2, "inner")];
        let b = vec![way(1, "outer"), way(2, "outer")];
        let diff = build(&a, &b);

        let diverged = vec![way(1, "outer")];
        assert_eq!(diff.apply(&diverged, &ApplyOptions::full()), b);
        assert_eq!(
            diff.apply(&diverged, &ApplyOptions::deleted_only()),
            vec![way(1, "outer"), way(2, "inner")]
        );
    }

    #[test]
    fn repeated_target_places_move_ahead_of_buffered_insert() {
        let a = vec![way(0, "r0"), way(0, "r1"), way(1, "r2")];
        let b = vec![way(0, "r1"), way(0, "r2"), way(1, "r0")];
        let diff = build(&a, &b);

        assert_eq!(
            diff.ops(),
            &[
                MemberOp::Delete(way(0, "r0")),
                MemberOp::Keep(way(0, "r1")),
                mv(ElementType::Way, 1, "r2", "r0"),
                MemberOp::Insert(way(0, "r2")),
            ]
        );
        assert_eq!(
            diff.apply(&a, &ApplyOptions::full()),
            vec![way(0, "r1"), way(1, "r0"), way(0, "r2")]
        );
        assert_eq!(diff.apply(&a, &ApplyOptions::deleted_only()), vec![way(0, "r1"), way(1, "r2")]);
    }

    #[test]
    fn display_rendering() {
        let a = vec![way(1, "outer"), way(2, "")];
        let b = vec![way(1, "inner"), way(2, ""), node(3, "stop")];
        let diff = build(&a, &b);
        assert_eq!(
            format!("{diff}"),
            "MembershipDiff[~way/1[outer->inner], =way/2[], +node/3[stop]]"
        );
    }

    // Compaction on hand-built raw op lists, independent of the aligner.

    #[test]
    fn compaction_requires_different_role() {
        let raw = vec![DiffOp::Delete(way(1, "outer")), DiffOp::Insert(way(1, "outer"))];
        assert_eq!(
            compact(raw, MemberMatching::Scan),
            vec![
                MemberOp::Delete(way(1, "outer")),
                MemberOp::Insert(way(1, "outer")),
            ]
        );
    }

    #[test]
    fn compaction_takes_first_match_in_buffer_order() {
        let raw = vec![
            DiffOp::Delete(way(1, "a")),
            DiffOp::Delete(way(1, "b")),
            DiffOp::Insert(way(1, "c")),
        ];
        assert_eq!(
            compact(raw, MemberMatching::Scan),
            vec![
                mv(ElementType::Way, 1, "a", "c"),
                MemberOp::Delete(way(1, "b")),
            ]
        );
    }

    #[test]
    fn compaction_pairs_each_entry_at_most_once() {
        let raw = vec![
            DiffOp::Delete(way(1, "a")),
            DiffOp::Insert(way(1, "b")),
            DiffOp::Insert(way(1, "c")),
        ];
        assert_eq!(
            compact(raw, MemberMatching::Scan),
            vec![
                mv(ElementType::Way, 1, "a", "b"),
                MemberOp::Insert(way(1, "c")),
            ]
        );
    }

    #[test]
    fn compaction_delete_side_is_always_role_from() {
        let raw = vec![DiffOp::Insert(way(1, "new")), DiffOp::Delete(way(1, "old"))];
        assert_eq!(
            compact(raw, MemberMatching::Scan),
            vec![mv(ElementType::Way, 1, "old", "new")]
        );
    }

    #[test]
    fn compaction_never_pairs_across_a_keep() {
        let raw = vec![
            DiffOp::Delete(way(1, "a")),
            DiffOp::Keep(node(5, "")),
            DiffOp::Insert(way(1, "b")),
        ];
        assert_eq!(
            compact(raw, MemberMatching::Scan),
            vec![
                MemberOp::Delete(way(1, "a")),
                MemberOp::Keep(node(5, "")),
                MemberOp::Insert(way(1, "b")),
            ]
        );
    }

    #[test]
    fn compaction_flushes_unmatched_in_buffer_order() {
        let raw = vec![
            DiffOp::Delete(way(3, "x")),
            DiffOp::Insert(node(4, "y")),
            DiffOp::Delete(way(1, "a")),
            DiffOp::Insert(way(1, "b")),
            DiffOp::Keep(node(9, "")),
        ];
        assert_eq!(
            compact(raw, MemberMatching::Scan),
            vec![
                mv(ElementType::Way, 1, "a", "b"),
                MemberOp::Delete(way(3, "x")),
                MemberOp::Insert(node(4, "y")),
                MemberOp::Keep(node(9, "")),
            ]
        );
    }

    // Property tests.

    fn member() -> impl Strategy<Value = Member> {
        (0u8..2, 0i64..4, 0u8..3).prop_map(|(t, r, role)| {
            let element_type = if t == 0 { ElementType::Way } else { ElementType::Node };
            Member::new(element_type, r, format!("r{role}"))
        })
    }

    /// Members whose role is fixed by their identity, so no role ever moves.
    fn stable_member() -> impl Strategy<Value = Member> {
        (0u8..2, 0i64..6).prop_map(|(t, r)| {
            let element_type = if t == 0 { ElementType::Way } else { ElementType::Node };
            Member::new(element_type, r, format!("r{}", r % 3))
        })
    }

    /// One relation's members before and after, each target appearing once
    /// and possibly changing role.
    fn role_changes() -> impl Strategy<Value = (Vec<Member>, Vec<Member>)> {
        proptest::collection::vec((0u8..3, 0u8..3), 0..12).prop_map(|roles| {
            roles
                .iter()
                .enumerate()
                .map(|(r, &(from, to))| {
                    let r = r as i64;
                    (way(r, &format!("r{from}")), way(r, &format!("r{to}")))
                })
                .unzip::<_, _, Vec<Member>, Vec<Member>>()
        })
    }

    fn distinct(members: Vec<Member>) -> Vec<Member> {
        let mut seen = std::collections::HashSet::new();
        members.into_iter().filter(|m| seen.insert(m.clone())).collect()
    }

    /// `members` with the first occurrence of the first plainly deleted
    /// member removed, as if another edit had already dropped it.
    fn drifted(diff: &MembershipDiff, members: &[Member]) -> Vec<Member> {
        let mut x = members.to_vec();
        let gone = diff.ops().iter().find_map(|op| match op {
            MemberOp::Delete(m) => Some(m),
            _ => None,
        });
        if let Some(at) = gone.and_then(|g| x.iter().position(|m| m == g)) {
            x.remove(at);
        }
        x
    }

    fn raw_op() -> impl Strategy<Value = DiffOp<Member>> {
        (0u8..3, member()).prop_map(|(kind, m)| match kind {
            0 => DiffOp::Delete(m),
            1 => DiffOp::Insert(m),
            _ => DiffOp::Keep(m),
        })
    }

    fn is_subsequence(needle: &[Member], haystack: &[Member]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|n| it.any(|h| h == n))
    }

    fn sorted(mut v: Vec<Member>) -> Vec<Member> {
        v.sort_by(|a, b| {
            (a.element_type, a.element_ref, &a.role).cmp(&(b.element_type, b.element_ref, &b.role))
        });
        v
    }

    proptest! {
        #[test]
        fn indexed_matching_is_identical_to_scan(raw in proptest::collection::vec(raw_op(), 0..30)) {
            prop_assert_eq!(
                compact(raw.clone(), MemberMatching::Indexed),
                compact(raw, MemberMatching::Scan)
            );
        }

        #[test]
        fn every_member_is_accounted_for(
            a in proptest::collection::vec(member(), 0..12),
            b in proptest::collection::vec(member(), 0..12),
        ) {
            let diff = build(&a, &b);
            let keeps = diff.ops().iter().filter(|op| op.is_keep()).count();
            prop_assert_eq!(keeps + diff.deletions() + diff.moves(), a.len());
            prop_assert_eq!(keeps + diff.additions() + diff.moves(), b.len());
        }

        #[test]
        fn round_trip_without_role_changes(
            a in proptest::collection::vec(stable_member(), 0..12),
            b in proptest::collection::vec(stable_member(), 0..12),
        ) {
            let diff = build(&a, &b);
            prop_assert_eq!(diff.moves(), 0);
            prop_assert_eq!(diff.apply(&a, &ApplyOptions::full()), b);
        }

        #[test]
        fn reflexive_no_op(x in proptest::collection::vec(member(), 0..12)) {
            let diff = build(&x, &x);
            prop_assert!(diff.is_empty());
            prop_assert_eq!(diff.apply(&x, &ApplyOptions::full()), x);
        }

        #[test]
        fn round_trip_for_role_changes_over_distinct_targets((a, b) in role_changes()) {
            let diff = build(&a, &b);
            prop_assert_eq!(diff.additions() + diff.deletions(), 0);
            prop_assert_eq!(diff.apply(&a, &ApplyOptions::full()), b);
            prop_assert_eq!(diff.apply(&a, &ApplyOptions::deleted_only()), a);
        }

        #[test]
        fn deleted_only_retains_kept_and_moved_members(
            a in proptest::collection::vec(member(), 0..12),
            b in proptest::collection::vec(member(), 0..12),
        ) {
            let diff = build(&a, &b);
            let projected = diff.apply(&a, &ApplyOptions::deleted_only());

            let retained: Vec<Member> = diff
                .ops()
                .iter()
                .filter_map(|op| match op {
                    MemberOp::Keep(m) => Some(m.clone()),
                    MemberOp::Move(mv) => Some(mv.from_member()),
                    MemberOp::Delete(_) | MemberOp::Insert(_) => None,
                })
                .collect();

            prop_assert!(is_subsequence(&projected, &a));
            prop_assert_eq!(sorted(projected), sorted(retained));
        }

        #[test]
        fn deleted_only_preserves_from_order(
            a in proptest::collection::vec(member(), 0..12).prop_map(distinct),
            b in proptest::collection::vec(member(), 0..12),
        ) {
            let diff = build(&a, &b);
            let retained: Vec<Member> = diff
                .ops()
                .iter()
                .filter_map(|op| match op {
                    MemberOp::Keep(m) => Some(m.clone()),
                    MemberOp::Move(mv) => Some(mv.from_member()),
                    MemberOp::Delete(_) | MemberOp::Insert(_) => None,
                })
                .collect();
            let expected: Vec<Member> = a.iter().filter(|m| retained.contains(m)).cloned().collect();

            prop_assert_eq!(diff.apply(&a, &ApplyOptions::deleted_only()), expected);
        }

        #[test]
        fn only_deletes_iff_projections_agree(
            a in proptest::collection::vec(member(), 0..12),
            b in proptest::collection::vec(member(), 0..12),
        ) {
            let diff = build(&a, &b);
            let full = diff.apply(&a, &ApplyOptions::full());
            let deleted = diff.apply(&a, &ApplyOptions::deleted_only());
            prop_assert_eq!(diff.only_deletes(), full == deleted);
        }

        #[test]
        fn only_deletes_iff_projections_agree_on_drifted_base(
            a in proptest::collection::vec(member(), 0..12),
            b in proptest::collection::vec(member(), 0..12),
        ) {
            let diff = build(&a, &b);
            let x = drifted(&diff, &a);
            let full = diff.apply(&x, &ApplyOptions::full());
            let deleted = diff.apply(&x, &ApplyOptions::deleted_only());
            prop_assert_eq!(diff.only_deletes(), full == deleted);
        }
    }
}
