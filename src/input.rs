use egui::{Context, PointerButton, Pos2, Rect};

/// A pointer event in canvas-local coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer crossed into the canvas.
    Enter(Pos2),
    /// The pointer crossed out of the canvas (or left the window).
    Leave,
    /// Primary button pressed over the canvas.
    Down(Pos2),
    /// The pointer moved while over the canvas.
    Move(Pos2),
    /// Primary button released over the canvas.
    Up(Pos2),
}

/// Translates raw egui input into [`PointerEvent`]s scoped to the canvas
/// rectangle, the way element-scoped listeners behave: enter/leave fire on
/// boundary crossings, and down/up are only observed over the canvas. A
/// release outside the canvas is therefore never reported, which is what
/// keeps a draw "armed" until the pointer comes back (see the pad's
/// enter-while-drawing handling).
pub struct InputHandler {
    canvas_rect: Rect,
    last_pos: Option<Pos2>,
    was_inside: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            last_pos: None,
            was_inside: false,
        }
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            ..Self::default()
        }
    }

    /// Update the canvas rectangle (the panel may move between frames).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Drains this frame's raw input into ordered pointer events.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let local = hover
                .filter(|pos| self.canvas_rect.contains(*pos))
                .map(|pos| self.to_canvas(pos));

            match (self.was_inside, local) {
                (false, Some(pos)) => events.push(PointerEvent::Enter(pos)),
                (true, None) => events.push(PointerEvent::Leave),
                _ => {}
            }

            if let Some(pos) = local {
                if input.pointer.button_pressed(PointerButton::Primary) {
                    events.push(PointerEvent::Down(pos));
                }
                if self.last_pos != Some(pos) {
                    events.push(PointerEvent::Move(pos));
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(PointerEvent::Up(pos));
                }
            }

            self.last_pos = local;
            self.was_inside = local.is_some();
        });

        events
    }
}
