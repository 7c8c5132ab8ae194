//! Scene graph walker and export builder.

use super::error::ExportError;
use super::registry::MeshRegistry;
use crate::host::{HostMesh, HostNode};
use crate::marshal::{FloatArray, IntArray, Vec2Array, Vec3Array};
use crate::math::trs_to_row_major;
use crate::scene::{Mesh, NodeKind, SceneNode};

/// Builds one export tree; owns the per-build mesh registry.
pub(crate) struct ExportBuilder {
    registry: MeshRegistry,
    node_count: usize,
}

impl ExportBuilder {
    pub(crate) fn new() -> Self {
        Self {
            registry: MeshRegistry::new(),
            node_count: 0,
        }
    }

    /// Transforms one host node and its subtree into an export node.
    ///
    /// Depth-first, pre-order with respect to mesh index assignment;
    /// children are fully built before the parent is assembled. The host
    /// hierarchy must be acyclic.
    pub(crate) fn build_node<N: HostNode>(&mut self, host: &N) -> Result<SceneNode, ExportError> {
        // Geometry renders only when both a geometry component and a
        // renderer component are present. The detected mesh becomes a
        // dedicated child node, appended after the host children.
        let mesh_child = match host.geometry() {
            Some(mesh) if host.has_renderer() => {
                let index = self
                    .registry
                    .get_or_create(mesh.identity(), || materialize_mesh(mesh))?;
                Some(SceneNode::new(NodeKind::Mesh).with_mesh_index(index))
            }
            _ => None,
        };

        let transform = host.local_transform();
        let (kind, local_matrix) = if transform.is_identity() {
            (NodeKind::Group, None)
        } else {
            let matrix =
                trs_to_row_major(transform.translation, transform.rotation, transform.scale);
            (
                NodeKind::Transform,
                Some(FloatArray::try_from_slice(&matrix)?),
            )
        };

        let host_children = host.children();
        let mut children = Vec::new();
        children.try_reserve_exact(host_children.len() + usize::from(mesh_child.is_some()))?;
        for child in host_children {
            children.push(self.build_node(child)?);
        }
        children.extend(mesh_child);

        self.node_count += 1;
        log::debug!(
            "export node complete: kind={kind:?}, children={}",
            children.len()
        );

        Ok(SceneNode {
            kind,
            children,
            local_matrix,
            mesh_index: None,
        })
    }

    /// Consume the builder after the full walk: the deduplicated mesh
    /// list in assignment order plus the number of nodes emitted.
    pub(crate) fn finish(self) -> (Vec<Mesh>, usize) {
        (self.registry.finalize(), self.node_count)
    }
}

/// Copies one host geometry into owned arrays for transfer.
///
/// # Panics
///
/// Panics when a per-vertex attribute count disagrees with the vertex
/// count. That defect must surface before transfer, not propagate into
/// the receiving side.
fn materialize_mesh<M: HostMesh>(mesh: &M) -> Result<Mesh, ExportError> {
    let vertices = mesh.vertices();
    let normals = mesh.normals();
    let uv0 = mesh.uv0();

    assert!(
        normals.is_empty() || normals.len() == vertices.len(),
        "host mesh {:?}: normal count {} != vertex count {}",
        mesh.identity(),
        normals.len(),
        vertices.len(),
    );
    assert!(
        uv0.is_empty() || uv0.len() == vertices.len(),
        "host mesh {:?}: uv0 count {} != vertex count {}",
        mesh.identity(),
        uv0.len(),
        vertices.len(),
    );

    Ok(Mesh {
        vertices: Vec3Array::try_from_slice(vertices)?,
        triangle_indices: IntArray::try_from_slice(mesh.triangle_indices())?,
        normals: Vec3Array::try_from_slice(normals)?,
        uv0: Vec2Array::try_from_slice(uv0)?,
    })
}
