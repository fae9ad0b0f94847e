//! Error types for segpaint-tools

use crate::store::ElementId;
use thiserror::Error;

/// Errors that can occur while handling tool gestures
#[derive(Debug, Error)]
pub enum ToolError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] segpaint_core::Error),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] segpaint_region::RegionError),

    /// No mask registered for the element
    #[error("no {tool_type} mask registered for element {element}")]
    MissingMask {
        element: ElementId,
        tool_type: &'static str,
    },
}

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;
