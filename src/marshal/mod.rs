//! Typed array marshaling and the boundary ownership contract.
//!
//! Large buffers (vertex, index, transform data) cross the process/runtime
//! boundary as pointer+length pairs, never inlined. This module provides
//! the two ownership variants and the conversions between them:
//!
//! - [`TypedArray`] — the local variant, an owned host-native sequence.
//!   Outgoing transfer borrows it as a [`RawArray`] view without copying.
//! - [`ForeignBuffer`] — a move-only owning handle over memory allocated on
//!   the far side of the boundary. Incoming results are materialized into
//!   local arrays with [`ForeignBuffer::to_local`] and the original buffer
//!   is returned to its allocator exactly once, on release or drop.
//! - [`ExportHandoff`] — lowers a built [`ExportScene`](crate::scene::ExportScene)
//!   into the `#[repr(C)]` transfer layout the receiving exporter walks
//!   read-only.
//!
//! Which side frees a buffer is a property of the types: a `TypedArray` is
//! never foreign-owned, a `ForeignBuffer` is never host-owned, and neither
//! can be constructed as the other.

mod array;
mod wire;

pub use array::{
    FloatArray, ForeignBuffer, IntArray, RawArray, ReleaseFn, TypedArray, Vec2, Vec2Array, Vec3,
    Vec3Array, Vec4, Vec4Array,
};
pub use wire::{ExportHandoff, RawExportScene, RawMesh, RawSceneNode};
