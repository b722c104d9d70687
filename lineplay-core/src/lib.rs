pub mod config;
pub mod event;
pub mod navigator;
pub mod playback;
pub mod renderer;
pub mod session;

pub use navigator::{Cue, CursorState, Navigator, Position};
pub use session::Session;
pub use playback::{Player, VoiceResolver};
pub use renderer::terminal::TerminalRenderer;
pub use event::{InputEvent, OutputEvent};
