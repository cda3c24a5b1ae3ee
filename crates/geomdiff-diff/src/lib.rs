//! Diff engine for geomdiff.
//!
//! Computes a structural diff between two versions of the same element and
//! applies it, whole or as its deleted-only projection, to a possibly
//! different copy of the element's geometry.
//!
//! # Key Types
//!
//! - [`GeomDiff`] / [`diff`] -- Kind dispatch over the three diff variants
//! - [`PointDiff`] -- Node position change
//! - [`LineDiff`] / [`DiffOp`] -- Way node-list diff
//! - [`MembershipDiff`] / [`MemberOp`] / [`RoleMove`] -- Relation member diff
//!   with role-move compaction
//! - [`ApplyOptions`] / [`DiffConfig`] / [`EngineConfig`] -- Application
//!   filter and engine configuration
//! - [`ApplyInPlace`] -- Apply-and-assign convenience for whole elements

mod cursor;
pub mod error;
pub mod geom_diff;
pub mod in_place;
pub mod line_diff;
pub mod member_diff;
pub mod op;
pub mod options;
pub mod point_diff;
pub mod sequence;

pub use error::{DiffError, DiffResult};
pub use geom_diff::{diff, diff_with_config, GeomDiff};
pub use in_place::ApplyInPlace;
pub use line_diff::LineDiff;
pub use member_diff::MembershipDiff;
pub use op::{DiffOp, MemberOp, RoleMove};
pub use options::{ApplyOptions, DiffConfig, EngineConfig, MemberMatching, Only};
pub use point_diff::PointDiff;
pub use sequence::diff_slices;
