//! Terminal presentation module.
//!
//! A thin rendering layer over the core: `game_view` maps snapshots into a
//! framebuffer (pure, testable), `renderer` flushes it to a raw-mode
//! terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
