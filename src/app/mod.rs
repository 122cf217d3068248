pub mod command;
pub mod repl;
