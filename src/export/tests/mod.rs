//! Scenario tests for the export builder, run against a synthetic host
//! hierarchy with no live engine state.

use std::sync::Arc;

use crate::host::{HostMesh, HostNode, MeshId, RootProvider};
use crate::marshal::{Vec2, Vec3};
use crate::scene::NodeTransform;


/// Synthetic host mesh resource.
pub(super) struct TestMesh {
    id: MeshId,
    vertices: Vec<Vec3>,
    triangle_indices: Vec<i32>,
    normals: Vec<Vec3>,
    uv0: Vec<Vec2>,
}

impl TestMesh {
    /// A single triangle with normals and one uv set.
    pub(super) fn triangle(id: u64) -> Arc<Self> {
        Arc::new(Self {
            id: MeshId(id),
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            triangle_indices: vec![0, 1, 2],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            uv0: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
        })
    }

    /// A triangle whose normal count disagrees with the vertex count.
    pub(super) fn with_broken_normals(id: u64) -> Arc<Self> {
        Arc::new(Self {
            id: MeshId(id),
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            triangle_indices: vec![0, 1, 2],
            normals: vec![[0.0, 0.0, 1.0]; 2],
            uv0: Vec::new(),
        })
    }
}

impl HostMesh for TestMesh {
    fn identity(&self) -> MeshId {
        self.id
    }

    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn triangle_indices(&self) -> &[i32] {
        &self.triangle_indices
    }

    fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    fn uv0(&self) -> &[Vec2] {
        &self.uv0
    }
}

/// Synthetic host node.
pub(super) struct TestNode {
    transform: NodeTransform,
    mesh: Option<Arc<TestMesh>>,
    renderer: bool,
    children: Vec<TestNode>,
}

impl TestNode {
    pub(super) fn group() -> Self {
        Self {
            transform: NodeTransform::IDENTITY,
            mesh: None,
            renderer: false,
            children: Vec::new(),
        }
    }

    pub(super) fn with_transform(mut self, transform: NodeTransform) -> Self {
        self.transform = transform;
        self
    }

    pub(super) fn translated(self, translation: [f32; 3]) -> Self {
        self.with_transform(NodeTransform::IDENTITY.with_translation(translation))
    }

    /// Attach a geometry component and a renderer component.
    pub(super) fn with_mesh(mut self, mesh: Arc<TestMesh>) -> Self {
        self.mesh = Some(mesh);
        self.renderer = true;
        self
    }

    /// Attach a geometry component only, no renderer.
    pub(super) fn with_unrendered_mesh(mut self, mesh: Arc<TestMesh>) -> Self {
        self.mesh = Some(mesh);
        self.renderer = false;
        self
    }

    pub(super) fn with_children(mut self, children: Vec<TestNode>) -> Self {
        self.children = children;
        self
    }
}

impl HostNode for TestNode {
    type Mesh = TestMesh;

    fn local_transform(&self) -> NodeTransform {
        self.transform
    }

    fn geometry(&self) -> Option<&TestMesh> {
        self.mesh.as_deref()
    }

    fn has_renderer(&self) -> bool {
        self.renderer
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Synthetic active scene.
pub(super) struct TestScene {
    pub(super) roots: Vec<TestNode>,
}

impl RootProvider for TestScene {
    type Node = TestNode;

    fn root_nodes(&self) -> Vec<&TestNode> {
        self.roots.iter().collect()
    }
}
