//! Operations recorded by a diff.
//!
//! [`DiffOp`] is the raw alignment vocabulary shared by every ordered
//! sequence: each element of either version lands in exactly one op.
//! [`MemberOp`] extends it for relation members with [`RoleMove`], which
//! stands in for a delete/insert pair of the same element under two roles.

use std::fmt;

use geomdiff_types::{ElementType, Member};
use serde::{Deserialize, Serialize};

/// One element of an aligned pair of sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp<T> {
    /// Present only in the "from" version.
    Delete(T),
    /// Present only in the "to" version.
    Insert(T),
    /// Present in both versions.
    Keep(T),
}

impl<T> DiffOp<T> {
    /// The element this op carries.
    pub fn element(&self) -> &T {
        match self {
            Self::Delete(e) | Self::Insert(e) | Self::Keep(e) => e,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep(_))
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete(_))
    }
}

impl<T: fmt::Display> fmt::Display for DiffOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete(e) => write!(f, "-{e}"),
            Self::Insert(e) => write!(f, "+{e}"),
            Self::Keep(e) => write!(f, "={e}"),
        }
    }
}

/// A relation member that survives between versions under a different role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMove {
    pub element_type: ElementType,
    pub element_ref: i64,
    /// Role in the "from" version.
    pub role_from: String,
    /// Role in the "to" version.
    pub role_to: String,
}

impl RoleMove {
    /// Pair a deleted member with its re-inserted counterpart.
    ///
    /// The two must reference the same element.
    pub fn between(deleted: &Member, inserted: &Member) -> Self {
        debug_assert!(deleted.same_target(inserted));
        Self {
            element_type: deleted.element_type,
            element_ref: deleted.element_ref,
            role_from: deleted.role.clone(),
            role_to: inserted.role.clone(),
        }
    }

    /// The member as it appears in the "from" version.
    pub fn from_member(&self) -> Member {
        Member::new(self.element_type, self.element_ref, self.role_from.clone())
    }

    /// The member as it appears in the "to" version.
    pub fn to_member(&self) -> Member {
        Member::new(self.element_type, self.element_ref, self.role_to.clone())
    }
}

impl fmt::Display for RoleMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "~{}/{}[{}->{}]",
            self.element_type, self.element_ref, self.role_from, self.role_to
        )
    }
}

/// One step of a relation membership diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberOp {
    Delete(Member),
    Insert(Member),
    Keep(Member),
    /// Same element in both versions, different role.
    Move(RoleMove),
}

impl MemberOp {
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep(_))
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move(_))
    }

    /// Returns `true` if full application of this op adds content that the
    /// deleted-only projection would not.
    pub fn adds_content(&self) -> bool {
        matches!(self, Self::Insert(_) | Self::Move(_))
    }
}

impl From<DiffOp<Member>> for MemberOp {
    fn from(op: DiffOp<Member>) -> Self {
        match op {
            DiffOp::Delete(m) => Self::Delete(m),
            DiffOp::Insert(m) => Self::Insert(m),
            DiffOp::Keep(m) => Self::Keep(m),
        }
    }
}

impl fmt::Display for MemberOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete(m) => write!(f, "-{m}"),
            Self::Insert(m) => write!(f, "+{m}"),
            Self::Keep(m) => write!(f, "={m}"),
            Self::Move(mv) => write!(f, "{mv}"),
        }
    }
}

/// Render a list of ops as `[op, op, ...]`.
pub(crate) fn write_ops<T: fmt::Display>(f: &mut fmt::Formatter<'_>, ops: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, op) in ops.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{op}")?;
    }
    f.write_str("]")
}
