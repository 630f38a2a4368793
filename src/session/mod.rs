pub mod buffer;
pub mod event;
pub mod interpreter;
pub mod prompt;
pub mod state;
pub mod timer;
pub mod typewriter;
