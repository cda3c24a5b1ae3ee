use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The kind of a geographic element.
///
/// The set is closed: every diff variant and every geometry payload is keyed
/// by one of these three, so matching on it is always exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// A single point carrying a position.
    Node,
    /// An ordered sequence of node references (a polyline or polygon ring).
    Way,
    /// An ordered, role-tagged collection of references to other elements.
    Relation,
}

impl ElementType {
    /// Lowercase name, as used on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(Self::Node),
            "way" => Ok(Self::Way),
            "relation" => Ok(Self::Relation),
            other => Err(TypeError::UnknownElementType(other.to_string())),
        }
    }
}
