//! Export scene data types.
//!
//! All types use plain arrays (`[f32; 3]`, `[f32; 4]`, etc.) so the data
//! model carries no math-library layout assumptions into the wire layer.

use crate::marshal::{FloatArray, IntArray, Vec2Array, Vec3Array};

/// Node transform decomposed into translation, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    /// Translation [x, y, z].
    pub translation: [f32; 3],
    /// Rotation quaternion [x, y, z, w].
    pub rotation: [f32; 4],
    /// Scale [x, y, z].
    pub scale: [f32; 3],
}

impl NodeTransform {
    /// Identity transform: no translation, identity rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0, 1.0, 1.0],
    };

    /// Exact identity check; any single component differing from identity
    /// makes the transform non-identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns this transform with a different translation.
    #[must_use]
    pub const fn with_translation(mut self, translation: [f32; 3]) -> Self {
        self.translation = translation;
        self
    }

    /// Returns this transform with a different rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: [f32; 4]) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns this transform with a different scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: [f32; 3]) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Classification of an export node.
///
/// The discriminant values are part of the boundary contract: the
/// receiving exporter switches on them when walking the transferred tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum NodeKind {
    /// Structural node with an identity local transform.
    Group = 0,
    /// Node carrying a non-identity local TRS matrix.
    Transform = 1,
    /// Leaf referencing an entry in the export mesh list.
    Mesh = 2,
    /// Reserved for light sources; the walker does not emit it yet.
    Light = 3,
}

/// A node in the export tree.
///
/// Nodes form a tree with no back-references and no shared subtrees.
/// Mesh references use indices into the owning [`ExportScene::meshes`]
/// list.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Effective geometric role of the node.
    pub kind: NodeKind,
    /// Child nodes in host-defined order.
    pub children: Vec<SceneNode>,
    /// Local TRS matrix flattened to 16 floats.
    /// Present only when `kind` is [`NodeKind::Transform`].
    pub local_matrix: Option<FloatArray>,
    /// Index into [`ExportScene::meshes`].
    /// Present only when `kind` is [`NodeKind::Mesh`].
    pub mesh_index: Option<u32>,
}

impl SceneNode {
    /// Creates a node of the given kind with no children or attachments.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            local_matrix: None,
            mesh_index: None,
        }
    }

    /// Set the child nodes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<SceneNode>) -> Self {
        self.children = children;
        self
    }

    /// Set the flattened local matrix.
    #[must_use]
    pub fn with_local_matrix(mut self, matrix: FloatArray) -> Self {
        self.local_matrix = Some(matrix);
        self
    }

    /// Set the mesh index.
    #[must_use]
    pub fn with_mesh_index(mut self, index: u32) -> Self {
        self.mesh_index = Some(index);
        self
    }
}

/// One renderable geometry resource. Immutable once built.
///
/// `normals` and `uv0` are either empty (attribute absent) or exactly
/// vertex-count long; the builder rejects anything else before transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec3Array,
    /// Flat triangle index list, three entries per triangle.
    pub triangle_indices: IntArray,
    pub normals: Vec3Array,
    pub uv0: Vec2Array,
}

/// The complete export structure: one root node plus the deduplicated,
/// ordered mesh list every `mesh_index` in the tree resolves against.
///
/// Built once per export operation, held for the duration of the transfer
/// call, and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportScene {
    pub root: SceneNode,
    pub meshes: Vec<Mesh>,
}
