//! Export-side scene data types.
//!
//! These are the flattened, self-contained types the builder produces and
//! the marshaling layer lowers for transfer:
//!
//! - [`NodeTransform`] — TRS transform using plain arrays
//! - [`NodeKind`] / [`SceneNode`] — the classified output node tree
//! - [`Mesh`] — one deduplicated geometry resource
//! - [`ExportScene`] — the node tree plus the ordered mesh list

mod types;

pub use types::{ExportScene, Mesh, NodeKind, NodeTransform, SceneNode};
