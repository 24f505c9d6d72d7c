pub mod classify;
pub mod emitter;
pub mod heredoc;

pub use emitter::ScriptEmitter;
