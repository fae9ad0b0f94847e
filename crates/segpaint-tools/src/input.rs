//! Mouse and touch adapters
//!
//! Both adapters forward host events to the same [`PointerGesture`]. The
//! mouse adapter tracks the button so a drag that arrives without a prior
//! press still starts a stroke.

use crate::error::ToolResult;
use crate::gesture::{PointerEvent, PointerGesture, ToolContext};

/// Mouse input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    Down(PointerEvent),
    /// Movement with no button held
    Move(PointerEvent),
    /// Movement with the button held
    Drag(PointerEvent),
    Up(PointerEvent),
    DoubleClick(PointerEvent),
}

/// Touch input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Start(PointerEvent),
    Drag(PointerEvent),
    End(PointerEvent),
    DoubleTap(PointerEvent),
}

/// Routes [`MouseEvent`]s to a gesture
#[derive(Debug, Clone, Default)]
pub struct MouseAdapter<G> {
    gesture: G,
    button_down: bool,
}

impl<G: PointerGesture> MouseAdapter<G> {
    pub fn new(gesture: G) -> Self {
        Self {
            gesture,
            button_down: false,
        }
    }

    pub fn gesture(&self) -> &G {
        &self.gesture
    }

    pub fn gesture_mut(&mut self) -> &mut G {
        &mut self.gesture
    }

    pub fn into_inner(self) -> G {
        self.gesture
    }

    /// Dispatch one mouse event.
    pub fn handle(&mut self, event: &MouseEvent, ctx: &mut ToolContext<'_>) -> ToolResult<()> {
        match event {
            MouseEvent::Down(e) => {
                self.button_down = true;
                self.gesture.on_start(e, ctx)
            }
            MouseEvent::Move(e) => self.gesture.on_move(e, ctx),
            MouseEvent::Drag(e) if !self.button_down => {
                self.button_down = true;
                self.gesture.on_start(e, ctx)
            }
            MouseEvent::Drag(e) => self.gesture.on_move(e, ctx),
            MouseEvent::Up(e) => {
                self.button_down = false;
                self.gesture.on_end(e, ctx)
            }
            MouseEvent::DoubleClick(e) => self.gesture.on_double_click(e, ctx),
        }
    }
}

/// Routes [`TouchEvent`]s to a gesture
#[derive(Debug, Clone, Default)]
pub struct TouchAdapter<G> {
    gesture: G,
}

impl<G: PointerGesture> TouchAdapter<G> {
    pub fn new(gesture: G) -> Self {
        Self { gesture }
    }

    pub fn gesture(&self) -> &G {
        &self.gesture
    }

    pub fn gesture_mut(&mut self) -> &mut G {
        &mut self.gesture
    }

    pub fn into_inner(self) -> G {
        self.gesture
    }

    /// Dispatch one touch event.
    pub fn handle(&mut self, event: &TouchEvent, ctx: &mut ToolContext<'_>) -> ToolResult<()> {
        match event {
            TouchEvent::Start(e) => self.gesture.on_start(e, ctx),
            TouchEvent::Drag(e) => self.gesture.on_move(e, ctx),
            TouchEvent::End(e) => self.gesture.on_end(e, ctx),
            TouchEvent::DoubleTap(e) => self.gesture.on_double_click(e, ctx),
        }
    }
}
