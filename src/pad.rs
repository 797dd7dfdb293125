use crate::command::Command;
use crate::history::CommandHistory;
use crate::input::PointerEvent;
use crate::tools::ToolConfig;

/// The pad's whole drawing state: committed history, the single preview
/// slot, and the Idle/Drawing flag of the input state machine.
///
/// Every pointer event runs to completion synchronously; the caller repaints
/// afterwards (under egui that happens every frame anyway).
#[derive(Debug, Default)]
pub struct SketchPad {
    history: CommandHistory,
    preview: Option<Command>,
    drawing: bool,
}

impl SketchPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one pointer event. The tool config is only read; the command
    /// created for a press snapshots its style at that moment.
    pub fn handle_pointer(&mut self, event: PointerEvent, tools: &ToolConfig) {
        match event {
            PointerEvent::Down(pos) => {
                self.drawing = true;
                self.preview = None;
                self.history.commit(tools.command_at(pos));
            }
            PointerEvent::Move(pos) => {
                if self.drawing {
                    self.history.extend_last(pos);
                } else if let Some(preview) = &mut self.preview {
                    preview.extend(pos);
                }
            }
            PointerEvent::Up(pos) => {
                self.drawing = false;
                self.preview = Some(tools.preview_at(pos));
            }
            PointerEvent::Enter(pos) => {
                if self.drawing {
                    // Coming back onto the canvas with the draw still armed
                    // starts a fresh command rather than continuing the one
                    // from before the pointer left.
                    self.history.commit(tools.command_at(pos));
                }
                self.preview = Some(tools.preview_at(pos));
            }
            PointerEvent::Leave => {
                // Cancels the hover hint only; an in-progress draw survives
                // until a release over the canvas.
                self.preview = None;
            }
        }
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The preview slot regardless of visibility.
    pub fn preview(&self) -> Option<&Command> {
        self.preview.as_ref()
    }

    /// The preview as the redraw pipeline sees it: hidden while drawing.
    pub fn visible_preview(&self) -> Option<&Command> {
        if self.drawing {
            None
        } else {
            self.preview.as_ref()
        }
    }
}
