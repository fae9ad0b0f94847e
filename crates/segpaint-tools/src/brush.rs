//! Brush tool
//!
//! Pressing and dragging paints disks of the configured label into the
//! element's mask. A double click fills the enclosed region under the
//! pointer. While the pointer is over the image the tool reports a circle
//! cursor for the host to draw.

use crate::error::ToolResult;
use crate::gesture::{PointerEvent, PointerGesture, ToolContext, Viewport, is_inside};
use crate::store::ElementId;
use segpaint_core::{BrushConfig, DiskOffsets};
use segpaint_region::{FillOutcome, FillParams, fill_enclosed_region};

/// Tool type key for brush masks in the [`ToolStateStore`](crate::ToolStateStore).
pub const BRUSH_TOOL_TYPE: &str = "brush";

/// Pointer state carried between gestures
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BrushSession {
    /// Element and image position of the last pointer event
    pub last_pointer: Option<(ElementId, f64, f64)>,
    /// True between press and release
    pub dragging: bool,
}

/// Hover circle for the host to stroke
#[derive(Debug, Clone, PartialEq)]
pub struct BrushCursor {
    /// Centre in canvas coordinates
    pub center: (f64, f64),
    /// Radius in canvas units
    pub radius: f64,
    pub color: String,
}

/// Brush painting and region-fill tool
#[derive(Debug, Clone)]
pub struct BrushTool {
    config: BrushConfig,
    offsets: DiskOffsets,
    session: BrushSession,
}

impl BrushTool {
    /// Create a brush with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: BrushConfig) -> ToolResult<Self> {
        config.validate()?;
        let offsets = DiskOffsets::new(config.radius);
        Ok(Self {
            config,
            offsets,
            session: BrushSession::default(),
        })
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    pub fn session(&self) -> &BrushSession {
        &self.session
    }

    /// Replace the configuration. Cached disk offsets are rebuilt when the
    /// radius changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation; the current
    /// configuration is kept.
    pub fn set_config(&mut self, config: BrushConfig) -> ToolResult<()> {
        config.validate()?;
        if config.radius != self.offsets.radius() {
            self.offsets = DiskOffsets::new(config.radius);
        }
        self.config = config;
        Ok(())
    }

    fn remember(&mut self, event: &PointerEvent) {
        self.session.last_pointer = Some((event.element, event.x, event.y));
    }

    /// Paint one disk at the pointer. Returns false for pointers outside
    /// the image, which are ignored.
    fn paint(&self, event: &PointerEvent, ctx: &mut ToolContext<'_>) -> ToolResult<bool> {
        if !event.is_inside_image() {
            return Ok(false);
        }

        let mask = ctx.store.mask_mut(event.element, BRUSH_TOOL_TYPE)?;
        let stamp = self.offsets.place(
            event.x.round() as i64,
            event.y.round() as i64,
            mask.width(),
            mask.height(),
        );
        let changed = mask.paint_stamp(&stamp, self.config.draw_label);
        tracing::trace!(
            element = %event.element,
            x = event.x,
            y = event.y,
            changed,
            "brush stroke"
        );
        Ok(true)
    }

    /// Fill the enclosed region under the pointer. A redraw is requested
    /// only when pixels were filled.
    pub fn fill(
        &self,
        event: &PointerEvent,
        ctx: &mut ToolContext<'_>,
    ) -> ToolResult<FillOutcome> {
        let mask = ctx.store.mask_mut(event.element, BRUSH_TOOL_TYPE)?;
        let params = FillParams::from(&self.config);
        let outcome = fill_enclosed_region(mask, event.x, event.y, &params);
        tracing::debug!(element = %event.element, ?outcome, "brush fill");

        if outcome.is_filled() {
            ctx.viewport.request_redraw(event.element);
        }
        Ok(outcome)
    }

    /// Hover cursor for the last pointer position.
    ///
    /// Returns `None` before any pointer event, or when the last position is
    /// outside the `rows` x `columns` image.
    pub fn cursor(
        &self,
        rows: u32,
        columns: u32,
        viewport: &dyn Viewport,
    ) -> Option<BrushCursor> {
        let (element, x, y) = self.session.last_pointer?;
        if !is_inside(x, y, rows, columns) {
            return None;
        }

        let center = viewport.pixel_to_canvas(element, x, y);
        let origin = viewport.pixel_to_canvas(element, 0.0, 0.0);
        let edge = viewport.pixel_to_canvas(element, f64::from(self.config.radius), 0.0);
        let color = if self.session.dragging {
            &self.config.drag_color
        } else {
            &self.config.hover_color
        };

        Some(BrushCursor {
            center,
            radius: (edge.0 - origin.0).abs(),
            color: color.clone(),
        })
    }
}

impl PointerGesture for BrushTool {
    fn on_start(&mut self, event: &PointerEvent, ctx: &mut ToolContext<'_>) -> ToolResult<()> {
        let painted = self.paint(event, ctx)?;
        self.session.dragging = true;
        self.remember(event);
        if painted {
            ctx.viewport.request_redraw(event.element);
        }
        Ok(())
    }

    /// Moves always redraw: the hover cursor follows the pointer.
    fn on_move(&mut self, event: &PointerEvent, ctx: &mut ToolContext<'_>) -> ToolResult<()> {
        self.remember(event);
        if self.session.dragging {
            self.paint(event, ctx)?;
        }
        ctx.viewport.request_redraw(event.element);
        Ok(())
    }

    fn on_end(&mut self, event: &PointerEvent, _ctx: &mut ToolContext<'_>) -> ToolResult<()> {
        self.session.dragging = false;
        self.remember(event);
        Ok(())
    }

    fn on_double_click(
        &mut self,
        event: &PointerEvent,
        ctx: &mut ToolContext<'_>,
    ) -> ToolResult<()> {
        self.fill(event, ctx).map(|_| ())
    }
}
