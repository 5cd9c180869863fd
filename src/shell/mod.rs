//! External program execution.

pub mod command;

pub use command::{execute_program, ProgramOutput};
