#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod pad;
pub mod renderer;
pub mod tools;

pub use app::SketchPadApp;
pub use command::Command;
pub use error::ExportError;
pub use history::CommandHistory;
pub use input::{InputHandler, PointerEvent};
pub use pad::SketchPad;
pub use renderer::{Surface, redraw};
pub use tools::{ToolConfig, ToolKind};
