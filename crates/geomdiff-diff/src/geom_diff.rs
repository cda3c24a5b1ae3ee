//! Kind dispatch over the three diff variants.

use std::fmt;

use geomdiff_types::{Element, ElementType, Geometry};
use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};
use crate::line_diff::LineDiff;
use crate::member_diff::MembershipDiff;
use crate::options::{ApplyOptions, DiffConfig};
use crate::point_diff::PointDiff;

/// A diff between two versions of one element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeomDiff {
    Point(PointDiff),
    Line(LineDiff),
    Membership(MembershipDiff),
}

/// Diff two versions of the same element with the default configuration.
///
/// Fails with [`DiffError::UnsupportedKind`] if the two elements are of
/// different kinds.
pub fn diff(a: &Element, b: &Element) -> DiffResult<GeomDiff> {
    diff_with_config(a, b, &DiffConfig::default())
}

/// Diff two versions of the same element.
pub fn diff_with_config(a: &Element, b: &Element, config: &DiffConfig) -> DiffResult<GeomDiff> {
    match (a, b) {
        (Element::Node(a), Element::Node(b)) => Ok(GeomDiff::Point(PointDiff::create(a, b))),
        (Element::Way(a), Element::Way(b)) => Ok(GeomDiff::Line(LineDiff::create(a, b))),
        (Element::Relation(a), Element::Relation(b)) => Ok(GeomDiff::Membership(
            MembershipDiff::create_with_config(a, b, config),
        )),
        (a, b) => Err(DiffError::UnsupportedKind {
            from: a.kind(),
            to: b.kind(),
        }),
    }
}

impl GeomDiff {
    /// The element kind this diff applies to.
    pub fn kind(&self) -> ElementType {
        match self {
            Self::Point(_) => ElementType::Node,
            Self::Line(_) => ElementType::Way,
            Self::Membership(_) => ElementType::Relation,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(d) => d.is_empty(),
            Self::Line(d) => d.is_empty(),
            Self::Membership(d) => d.is_empty(),
        }
    }

    pub fn only_deletes(&self) -> bool {
        match self {
            Self::Point(d) => d.only_deletes(),
            Self::Line(d) => d.only_deletes(),
            Self::Membership(d) => d.only_deletes(),
        }
    }

    /// Apply the diff to a geometry of the matching kind, returning the new
    /// geometry.
    pub fn apply(&self, geometry: &Geometry, options: &ApplyOptions) -> DiffResult<Geometry> {
        match (self, geometry) {
            (Self::Point(d), Geometry::Position(p)) => Ok(Geometry::Position(d.apply(*p, options))),
            (Self::Line(d), Geometry::Points(nodes)) => Ok(Geometry::Points(d.apply(nodes, options))),
            (Self::Membership(d), Geometry::Members(members)) => {
                Ok(Geometry::Members(d.apply(members, options)))
            }
            (this, other) => Err(DiffError::GeometryMismatch {
                expected: this.kind(),
                actual: other.kind(),
            }),
        }
    }
}

impl fmt::Display for GeomDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(d) => fmt::Display::fmt(d, f),
            Self::Line(d) => fmt::Display::fmt(d, f),
            Self::Membership(d) => fmt::Display::fmt(d, f),
        }
    }
}

impl From<PointDiff> for GeomDiff {
    fn from(d: PointDiff) -> Self {
        Self::Point(d)
    }
}

impl From<LineDiff> for GeomDiff {
    fn from(d: LineDiff) -> Self {
        Self::Line(d)
    }
}

impl From<MembershipDiff> for GeomDiff {
    fn from(d: MembershipDiff) -> Self {
        Self::Membership(d)
    }
}
