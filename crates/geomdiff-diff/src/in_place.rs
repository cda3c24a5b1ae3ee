//! Apply-and-assign for whole elements.
//!
//! Each impl is a pure `apply` on the element's geometry followed by a
//! single assignment of the result.

use geomdiff_types::{Element, Node, Relation, Way};

use crate::error::DiffResult;
use crate::geom_diff::GeomDiff;
use crate::line_diff::LineDiff;
use crate::member_diff::MembershipDiff;
use crate::options::ApplyOptions;
use crate::point_diff::PointDiff;

/// A diff that can update the element owning its geometry.
pub trait ApplyInPlace<T> {
    /// Replace `target`'s geometry with the result of applying this diff to it.
    fn apply_in_place(&self, target: &mut T, options: &ApplyOptions) -> DiffResult<()>;
}

impl ApplyInPlace<Node> for PointDiff {
    fn apply_in_place(&self, target: &mut Node, options: &ApplyOptions) -> DiffResult<()> {
        if !self.is_null_move() {
            target.position = self.apply(target.position, options);
        }
        Ok(())
    }
}

impl ApplyInPlace<Way> for LineDiff {
    fn apply_in_place(&self, target: &mut Way, options: &ApplyOptions) -> DiffResult<()> {
        target.nodes = self.apply(&target.nodes, options);
        Ok(())
    }
}

impl ApplyInPlace<Relation> for MembershipDiff {
    fn apply_in_place(&self, target: &mut Relation, options: &ApplyOptions) -> DiffResult<()> {
        target.members = self.apply(&target.members, options);
        Ok(())
    }
}

impl ApplyInPlace<Element> for GeomDiff {
    fn apply_in_place(&self, target: &mut Element, options: &ApplyOptions) -> DiffResult<()> {
        let geometry = self.apply(&target.geometry(), options)?;
        target.set_geometry(geometry)?;
        Ok(())
    }
}
