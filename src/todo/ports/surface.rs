//! View application port.

use crate::todo::view::TodoListView;
use std::sync::Arc;
use thiserror::Error;

/// Result type for view surface operations.
pub type ViewSurfaceResult<T> = Result<T, ViewSurfaceError>;

/// Contract for applying a declarative view description to a UI surface.
///
/// The controller performs a full redraw through this port after every
/// mutation; implementations replace whatever was previously displayed.
pub trait ViewSurface {
    /// Applies `view` to the surface, replacing the previous content.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSurfaceError`] when rendering or surface application
    /// fails.
    fn apply(&mut self, view: &TodoListView) -> ViewSurfaceResult<()>;
}

/// Errors returned by view surface implementations.
#[derive(Debug, Clone, Error)]
pub enum ViewSurfaceError {
    /// Template rendering failed.
    #[error("view template rendering failed: {reason}")]
    Render {
        /// Description of the rendering failure.
        reason: String,
    },

    /// Surface-layer failure.
    #[error("view surface error: {0}")]
    Surface(Arc<dyn std::error::Error + Send + Sync>),
}

impl ViewSurfaceError {
    /// Wraps a surface-layer error.
    pub fn surface(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Surface(Arc::new(err))
    }
}
