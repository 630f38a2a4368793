pub mod command;
pub mod completion;
pub mod history;
pub mod line;
pub mod project;
pub mod theme;
