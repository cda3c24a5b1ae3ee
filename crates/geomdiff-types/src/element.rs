//! Geographic elements and their diffable geometry.
//!
//! Each element kind owns exactly one geometry field: a node its
//! [`Position`], a way its ordered [`NodeRef`] list, a relation its ordered
//! [`Member`] list. [`Geometry`] is the closed union of those payloads, so an
//! element's geometry can be read, replaced, or handed to the diff engine
//! without knowing the kind up front.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::kind::ElementType;
use crate::member::{Member, NodeRef};
use crate::position::Position;

/// A single point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    #[serde(default)]
    pub version: u32,
    pub position: Position,
}

/// An ordered sequence of node references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Way {
    pub id: i64,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub nodes: Vec<NodeRef>,
}

/// An ordered, role-tagged collection of references to other elements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub id: i64,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Node {
    pub fn new(id: i64, version: u32, position: Position) -> Self {
        Self {
            id,
            version,
            position,
        }
    }
}

impl Way {
    pub fn new(id: i64, version: u32, nodes: Vec<NodeRef>) -> Self {
        Self { id, version, nodes }
    }
}

impl Relation {
    pub fn new(id: i64, version: u32, members: Vec<Member>) -> Self {
        Self {
            id,
            version,
            members,
        }
    }
}

/// Any element, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node(Node),
    Way(Way),
    Relation(Relation),
}

impl Element {
    /// The kind of this element.
    pub fn kind(&self) -> ElementType {
        match self {
            Self::Node(_) => ElementType::Node,
            Self::Way(_) => ElementType::Way,
            Self::Relation(_) => ElementType::Relation,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Node(n) => n.id,
            Self::Way(w) => w.id,
            Self::Relation(r) => r.id,
        }
    }

    pub fn version(&self) -> u32 {
        match self {
            Self::Node(n) => n.version,
            Self::Way(w) => w.version,
            Self::Relation(r) => r.version,
        }
    }

    /// A copy of this element's geometry.
    pub fn geometry(&self) -> Geometry {
        match self {
            Self::Node(n) => Geometry::Position(n.position),
            Self::Way(w) => Geometry::Points(w.nodes.clone()),
            Self::Relation(r) => Geometry::Members(r.members.clone()),
        }
    }

    /// Replace this element's geometry.
    ///
    /// Fails without modifying the element if `geometry` belongs to another
    /// kind.
    pub fn set_geometry(&mut self, geometry: Geometry) -> Result<(), TypeError> {
        match (self, geometry) {
            (Self::Node(n), Geometry::Position(p)) => n.position = p,
            (Self::Way(w), Geometry::Points(nodes)) => w.nodes = nodes,
            (Self::Relation(r), Geometry::Members(members)) => r.members = members,
            (this, other) => {
                return Err(TypeError::GeometryKindMismatch {
                    expected: this.kind(),
                    actual: other.kind(),
                })
            }
        }
        Ok(())
    }
}

impl From<Node> for Element {
    fn from(n: Node) -> Self {
        Self::Node(n)
    }
}

impl From<Way> for Element {
    fn from(w: Way) -> Self {
        Self::Way(w)
    }
}

impl From<Relation> for Element {
    fn from(r: Relation) -> Self {
        Self::Relation(r)
    }
}

/// The diffable payload of an element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Position(Position),
    Points(Vec<NodeRef>),
    Members(Vec<Member>),
}

impl Geometry {
    /// The element kind that owns this kind of geometry.
    pub fn kind(&self) -> ElementType {
        match self {
            Self::Position(_) => ElementType::Node,
            Self::Points(_) => ElementType::Way,
            Self::Members(_) => ElementType::Relation,
        }
    }
}
