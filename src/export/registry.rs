//! Deduplicating mesh store.

use std::collections::HashMap;

use super::error::ExportError;
use crate::host::MeshId;
use crate::scene::Mesh;

/// Maps mesh identities to indices in the ordered export mesh list.
///
/// Lookup goes through a hash map while assignment order is kept in a
/// parallel list, so the final mesh sequence is deterministic for a given
/// traversal order: index assignment order equals first-encounter order.
/// One registry lives for one build and is consumed by
/// [`finalize`](Self::finalize).
pub(crate) struct MeshRegistry {
    indices: HashMap<MeshId, u32>,
    meshes: Vec<Mesh>,
}

impl MeshRegistry {
    pub(crate) fn new() -> Self {
        Self {
            indices: HashMap::new(),
            meshes: Vec::new(),
        }
    }

    /// Returns the index assigned to `id`, materializing the mesh through
    /// `build` on first encounter. `build` is not invoked for an id seen
    /// before.
    pub(crate) fn get_or_create<F>(&mut self, id: MeshId, build: F) -> Result<u32, ExportError>
    where
        F: FnOnce() -> Result<Mesh, ExportError>,
    {
        if let Some(&index) = self.indices.get(&id) {
            return Ok(index);
        }

        let mesh = build()?;
        let index = self.meshes.len() as u32;
        self.meshes.push(mesh);
        self.indices.insert(id, index);
        Ok(index)
    }

    /// The mesh list in assignment order. Called once, after the walk.
    pub(crate) fn finalize(self) -> Vec<Mesh> {
        self.meshes
    }
}
