use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::ElementType;

/// Reference to a node from inside a way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeRef(pub i64);

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// One element's participation in a relation.
///
/// Equality covers the whole triple: the same element under a different role
/// is a different member. Use [`Member::same_target`] to compare identity
/// without the role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    /// Kind of the referenced element.
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Id of the referenced element.
    #[serde(rename = "ref")]
    pub element_ref: i64,
    /// Qualifying role within the relation (may be empty).
    #[serde(default)]
    pub role: String,
}

impl Member {
    /// Create a new member.
    pub fn new(element_type: ElementType, element_ref: i64, role: impl Into<String>) -> Self {
        Self {
            element_type,
            element_ref,
            role: role.into(),
        }
    }

    /// Returns `true` if both members reference the same element, whatever
    /// their roles.
    pub fn same_target(&self, other: &Member) -> bool {
        self.element_type == other.element_type && self.element_ref == other.element_ref
    }

    /// The same element under another role.
    pub fn with_role(&self, role: impl Into<String>) -> Self {
        Self::new(self.element_type, self.element_ref, role)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}[{}]", self.element_type, self.element_ref, self.role)
    }
}
