//! `#[repr(C)]` transfer layout for a built export scene.
//!
//! The receiving exporter walks the transferred structure read-only: a
//! fixed-size header per node (discriminant, child/matrix lengths, mesh
//! id) with every variable-length payload referenced as a pointer+length
//! pair, nothing inlined.

use std::marker::PhantomData;

use super::array::{RawArray, Vec2, Vec3};
use crate::scene::{ExportScene, Mesh, SceneNode};

/// Transfer form of one [`Mesh`]. All payloads borrow the scene's buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawMesh {
    pub vertices: RawArray<Vec3>,
    pub triangle_indices: RawArray<i32>,
    pub normals: RawArray<Vec3>,
    pub uv0: RawArray<Vec2>,
}

/// Transfer form of one [`SceneNode`].
///
/// `kind` carries the [`NodeKind`](crate::scene::NodeKind) discriminant.
/// `matrix` is 16 floats for transform nodes, empty otherwise. `mesh_id`
/// is meaningful only for mesh nodes; the receiver must not read it for
/// other kinds.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawSceneNode {
    pub kind: u32,
    pub children: RawArray<RawSceneNode>,
    pub matrix: RawArray<f32>,
    pub mesh_id: u32,
}

/// Transfer form of a complete [`ExportScene`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawExportScene {
    pub root: RawSceneNode,
    pub meshes: RawArray<RawMesh>,
}

/// Lowered view of an [`ExportScene`], ready for the outgoing transfer
/// call.
///
/// Vertex, index, and matrix payload pointers borrow the scene's own
/// buffers; only the nested per-node child arrays are allocated here and
/// owned by the handoff. The borrow on the scene keeps every pointer in
/// the raw structure valid for the handoff's lifetime; the transfer call
/// must complete before either is dropped.
pub struct ExportHandoff<'a> {
    raw: RawExportScene,
    _meshes: Box<[RawMesh]>,
    _node_arrays: Vec<Box<[RawSceneNode]>>,
    _scene: PhantomData<&'a ExportScene>,
}

impl<'a> ExportHandoff<'a> {
    /// Lower a built scene into the transfer layout.
    pub fn new(scene: &'a ExportScene) -> Self {
        let mut node_arrays = Vec::new();
        let root = lower_node(&scene.root, &mut node_arrays);

        let meshes: Box<[RawMesh]> = scene.meshes.iter().map(lower_mesh).collect();
        let raw = RawExportScene {
            root,
            meshes: raw_view(&meshes),
        };

        Self {
            raw,
            _meshes: meshes,
            _node_arrays: node_arrays,
            _scene: PhantomData,
        }
    }

    /// The structure to hand across the boundary.
    pub fn raw(&self) -> &RawExportScene {
        &self.raw
    }
}

fn lower_mesh(mesh: &Mesh) -> RawMesh {
    RawMesh {
        vertices: mesh.vertices.as_raw(),
        triangle_indices: mesh.triangle_indices.as_raw(),
        normals: mesh.normals.as_raw(),
        uv0: mesh.uv0.as_raw(),
    }
}

// Children are lowered bottom-up into boxed slices pushed onto `arrays`;
// the boxed allocations never move afterwards, so the parent's pointer
// into them stays valid.
fn lower_node(node: &SceneNode, arrays: &mut Vec<Box<[RawSceneNode]>>) -> RawSceneNode {
    let children: Box<[RawSceneNode]> = node
        .children
        .iter()
        .map(|child| lower_node(child, arrays))
        .collect();

    let children_view = raw_view(&children);
    if !children.is_empty() {
        arrays.push(children);
    }

    RawSceneNode {
        kind: node.kind as u32,
        children: children_view,
        matrix: node
            .local_matrix
            .as_ref()
            .map(|m| m.as_raw())
            .unwrap_or_else(RawArray::empty),
        mesh_id: node.mesh_index.unwrap_or(0),
    }
}

fn raw_view<T>(slice: &[T]) -> RawArray<T> {
    if slice.is_empty() {
        RawArray::empty()
    } else {
        RawArray {
            ptr: slice.as_ptr() as *mut T,
            len: slice.len() as u32,
        }
    }
}
