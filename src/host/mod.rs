//! Read-only capability traits over the host hierarchy.
//!
//! The live scene graph that supplies transforms, geometry, and children
//! is externally owned; this core only requires that a node can report a
//! local transform, its typed renderable components, and an ordered child
//! list. Root enumeration is injected through [`RootProvider`] so the
//! builder can run against synthetic hierarchies with no live engine
//! state.
//!
//! Nothing here may mutate the host; concurrent builds over the same
//! hierarchy are safe exactly as long as the host is not mutated during
//! the walk, which is the caller's discipline.

use crate::marshal::{Vec2, Vec3};
use crate::scene::NodeTransform;

/// Stable identity of a host mesh resource.
///
/// Two host nodes referencing the same underlying resource must report
/// equal ids. This is an identity, not a content hash: meshes with equal
/// geometry but distinct resources stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u64);

/// One geometry resource as the host exposes it.
pub trait HostMesh {
    fn identity(&self) -> MeshId;

    fn vertices(&self) -> &[Vec3];

    /// Flat triangle index list, three entries per triangle.
    fn triangle_indices(&self) -> &[i32];

    /// Per-vertex normals; empty when the attribute is absent. A
    /// non-empty slice whose length differs from the vertex count is a
    /// host defect and aborts the build.
    fn normals(&self) -> &[Vec3];

    /// Per-vertex texture coordinates (set 0); empty when absent.
    fn uv0(&self) -> &[Vec2];
}

/// One node of the host hierarchy.
///
/// The hierarchy is assumed acyclic; a cyclic graph makes the walk
/// non-terminating (precondition, not a handled error).
pub trait HostNode {
    type Mesh: HostMesh;

    /// Local TRS relative to the parent.
    fn local_transform(&self) -> NodeTransform;

    /// The node's geometry component, if it has one.
    fn geometry(&self) -> Option<&Self::Mesh>;

    /// Whether the node also carries a renderer component. Geometry is
    /// only exported when both components are present.
    fn has_renderer(&self) -> bool;

    /// Direct children in host-defined order.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// Supplier of the active scene's top-level nodes.
pub trait RootProvider {
    type Node: HostNode;

    /// Top-level nodes in scene-defined order.
    fn root_nodes(&self) -> Vec<&Self::Node>;
}
