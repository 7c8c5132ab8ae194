//! Export scene construction.
//!
//! Walks a host hierarchy depth-first, classifies every node by its
//! effective geometric role (group, transform, mesh), deduplicates mesh
//! resources shared between nodes, and assembles the flat
//! [`ExportScene`](crate::scene::ExportScene) that the marshaling layer
//! lowers for transfer.
//!
//! Each build owns a fresh mesh registry and output tree, so builds do
//! not share mutable state; the walk runs synchronously to completion on
//! the calling thread. A failed build discards the in-progress scene in
//! full and is simply re-attempted from scratch by the caller — there are
//! no retries in this core.
//!
//! # Example
//!
//! ```ignore
//! use sceneport::export::build_export_scene;
//! use sceneport::marshal::ExportHandoff;
//!
//! // `scene_view` implements RootProvider over the live hierarchy.
//! let scene = build_export_scene(&scene_view, None)?;
//! let handoff = ExportHandoff::new(&scene);
//! unsafe { exporter_export_scene(handoff.raw()) };
//! // handoff and scene dropped after the call returns; nothing leaks.
//! ```

mod builder;
mod error;
mod registry;
#[cfg(test)]
mod tests;

pub use error::ExportError;

use crate::host::RootProvider;
use crate::scene::{ExportScene, NodeKind, SceneNode};
use builder::ExportBuilder;

/// Build the export structure for one complete export operation.
///
/// The root set is `target` alone when given, otherwise every top-level
/// node of `provider`'s active scene, in scene-defined order. The output
/// root is always a [`NodeKind::Group`] whose children are the walker's
/// output for each root-set member, in order.
pub fn build_export_scene<P: RootProvider>(
    provider: &P,
    target: Option<&P::Node>,
) -> Result<ExportScene, ExportError> {
    let roots: Vec<&P::Node> = match target {
        Some(node) => vec![node],
        None => provider.root_nodes(),
    };

    let mut builder = ExportBuilder::new();
    let mut children = Vec::new();
    children.try_reserve_exact(roots.len())?;
    for root in roots {
        children.push(builder.build_node(root)?);
    }

    let root = SceneNode::new(NodeKind::Group).with_children(children);
    let (meshes, node_count) = builder.finish();
    log::info!(
        "export scene built: {node_count} nodes, {} meshes",
        meshes.len()
    );

    Ok(ExportScene { root, meshes })
}
