use egui::Pos2;

use crate::command::Command;

/// The committed commands plus the redo stack.
///
/// The command list doubles as the draw list: the redraw pipeline paints it
/// in insertion order. Only committable variants (`Stroke`/`Sticker`) belong
/// here; previews never touch either stack.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    commands: Vec<Command>,
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a freshly created command. Anything waiting on the redo stack
    /// no longer matches the history it was undone from, so it is dropped.
    pub fn commit(&mut self, command: Command) {
        debug_assert!(command.is_committable());
        self.commands.push(command);
        self.redo_stack.clear();
    }

    /// Extends the most recent command (the one being drawn). No-op when the
    /// history is empty.
    pub fn extend_last(&mut self, point: Pos2) {
        if let Some(command) = self.commands.last_mut() {
            command.extend(point);
        }
    }

    /// Moves the last committed command to the redo stack. Returns whether
    /// anything changed; undoing an empty history is a no-op.
    pub fn undo(&mut self) -> bool {
        match self.commands.pop() {
            Some(command) => {
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone command back onto the history.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                self.commands.push(command);
                true
            }
            None => false,
        }
    }

    /// Empties both stacks.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.redo_stack.clear();
    }

    /// The committed commands in insertion order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Undone commands awaiting a possible redo, oldest first.
    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.commands.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
