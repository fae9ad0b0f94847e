//! Per-element tool state
//!
//! The host owns one [`ToolStateStore`] and hands it to every gesture.
//! Each displayed element can carry one mask per tool type.

use crate::error::{ToolError, ToolResult};
use segpaint_core::Mask;
use std::collections::HashMap;
use std::fmt;

/// Host identifier of a displayed image element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Masks keyed by element and tool type
#[derive(Debug, Default)]
pub struct ToolStateStore {
    masks: HashMap<ElementId, HashMap<&'static str, Mask>>,
}

impl ToolStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mask for an element, returning the one it replaces.
    pub fn insert_mask(
        &mut self,
        element: ElementId,
        tool_type: &'static str,
        mask: Mask,
    ) -> Option<Mask> {
        self.masks
            .entry(element)
            .or_default()
            .insert(tool_type, mask)
    }

    /// Get the mask registered for an element.
    pub fn mask(&self, element: ElementId, tool_type: &str) -> Option<&Mask> {
        self.masks.get(&element)?.get(tool_type)
    }

    /// Get the mask registered for an element for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::MissingMask`] if none is registered.
    pub fn mask_mut(
        &mut self,
        element: ElementId,
        tool_type: &'static str,
    ) -> ToolResult<&mut Mask> {
        self.masks
            .get_mut(&element)
            .and_then(|entries| entries.get_mut(tool_type))
            .ok_or(ToolError::MissingMask { element, tool_type })
    }

    /// Drop all state for an element.
    pub fn remove_element(&mut self, element: ElementId) -> bool {
        self.masks.remove(&element).is_some()
    }

    /// Number of elements with registered state.
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Check if the store holds no state.
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}
