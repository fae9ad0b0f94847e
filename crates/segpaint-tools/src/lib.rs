//! segpaint-tools - Pointer-driven segmentation tools
//!
//! This crate connects host pointer input to mask editing:
//!
//! - [`BrushTool`] - Paint disks while dragging, fill enclosed regions on
//!   double click, report a hover cursor
//! - [`PointerGesture`] - The one interface every tool implements
//! - [`MouseAdapter`] / [`TouchAdapter`] - Route host events to a gesture
//! - [`ToolStateStore`] - Masks per displayed element
//!
//! # Examples
//!
//! ```
//! use segpaint_core::{BrushConfig, Mask};
//! use segpaint_tools::{
//!     BRUSH_TOOL_TYPE, BrushTool, ElementId, MouseAdapter, MouseEvent, PointerEvent,
//!     ToolContext, ToolStateStore, Viewport,
//! };
//!
//! struct Screen;
//! impl Viewport for Screen {
//!     fn request_redraw(&mut self, _element: ElementId) {}
//!     fn pixel_to_canvas(&self, _element: ElementId, x: f64, y: f64) -> (f64, f64) {
//!         (x, y)
//!     }
//! }
//!
//! let element = ElementId(1);
//! let mut store = ToolStateStore::new();
//! store.insert_mask(element, BRUSH_TOOL_TYPE, Mask::new(32, 32).unwrap());
//!
//! let mut screen = Screen;
//! let mut ctx = ToolContext::new(&mut store, &mut screen);
//! let mut mouse = MouseAdapter::new(BrushTool::new(BrushConfig::default()).unwrap());
//!
//! let at = PointerEvent::new(element, 10.0, 10.0, 32, 32);
//! mouse.handle(&MouseEvent::Down(at), &mut ctx).unwrap();
//! mouse.handle(&MouseEvent::Up(at), &mut ctx).unwrap();
//!
//! assert_eq!(store.mask(element, BRUSH_TOOL_TYPE).unwrap().get_label(10, 10), Some(1));
//! ```

pub mod brush;
pub mod error;
pub mod gesture;
pub mod input;
pub mod store;

pub use brush::{BRUSH_TOOL_TYPE, BrushCursor, BrushSession, BrushTool};
pub use error::{ToolError, ToolResult};
pub use gesture::{PointerEvent, PointerGesture, ToolContext, Viewport};
pub use input::{MouseAdapter, MouseEvent, TouchAdapter, TouchEvent};
pub use store::{ElementId, ToolStateStore};
