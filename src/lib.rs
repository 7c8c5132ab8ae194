//! # ScenePort
//!
//! Core crate for turning a live, externally owned scene hierarchy into a
//! flat, self-contained export structure that can be handed across a
//! process/runtime boundary to an external scene-graph exporter.
//!
//! The crate has four concerns:
//!
//! - [`host`] — read-only capability traits describing the host hierarchy
//!   (transforms, geometry components, children, root enumeration).
//! - [`scene`] — the export-side data model: [`scene::SceneNode`] trees,
//!   deduplicated [`scene::Mesh`] lists, [`scene::ExportScene`].
//! - [`export`] — the graph walker that classifies host nodes, deduplicates
//!   shared mesh resources, and assembles the export tree.
//! - [`marshal`] — typed array wrappers and the `#[repr(C)]` transfer
//!   layout, with an explicit single-owner release contract for memory
//!   allocated on the far side of the boundary.

pub mod export;
pub mod host;
pub mod marshal;
pub mod math;
pub mod scene;

/// Core library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
