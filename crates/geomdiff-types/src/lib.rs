//! Entity model for geomdiff.
//!
//! The diff engine compares exactly three kinds of geographic element and
//! only ever reads the part of each that carries its geometry. This crate
//! provides those elements and the value types they are built from.
//!
//! # Key Types
//!
//! - [`ElementType`] -- The closed set of element kinds (node, way, relation)
//! - [`Position`] -- Fixed-point coordinate of a node
//! - [`NodeRef`] -- Reference to a node from inside a way
//! - [`Member`] -- Role-tagged reference from a relation to another element
//! - [`Element`] / [`Geometry`] -- A whole element and its diffable payload

pub mod element;
pub mod error;
pub mod kind;
pub mod member;
pub mod position;

pub use element::{Element, Geometry, Node, Relation, Way};
pub use error::TypeError;
pub use kind::ElementType;
pub use member::{Member, NodeRef};
pub use position::Position;
