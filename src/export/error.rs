//! Error types for export building.

use std::collections::TryReserveError;

/// Errors that can occur while building an export scene.
///
/// Only resource exhaustion is recoverable; precondition violations
/// (inconsistent geometry array lengths, cyclic host graphs, bad foreign
/// pointers) are programming errors and are not represented here.
#[derive(Debug)]
pub enum ExportError {
    /// Allocation failed while materializing a mesh or typed array. The
    /// in-progress export scene is discarded in full; no partial export
    /// is returned.
    Alloc(TryReserveError),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alloc(e) => write!(f, "allocation failed during export build: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for ExportError {
    fn from(e: TryReserveError) -> Self {
        Self::Alloc(e)
    }
}
