//! Render error types.

use thiserror::Error;

/// Errors produced while rendering a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Chart construction or drawing failed (font lookup, backend draw,
    /// bitmap encode). Stringified because the plotting library's error
    /// type is generic over the drawing backend.
    #[error("chart error: {0}")]
    Chart(String),

    /// I/O error writing the frame file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type RenderResult<T> = Result<T, RenderError>;

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        RenderError::Chart(e.to_string())
    }
}
