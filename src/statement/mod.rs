//! Statement Module
//!
//! Turns one shell line into a validated command and describes what
//! executing it produced.
//!
//! ## Recognized Lines
//! - `insert <id> <username> <email>` → `Command::Insert`
//! - `select`                         → `Command::Select`
//! - `.exit`                          → `Command::Exit`
//!
//! ## Insert Validation (first failure wins)
//! 0. fewer than three tokens after `insert` → `SyntaxError`; extra tokens are ignored
//! 1. id must be a positive i32, else `IdMustBePositive`
//! 2. username ≤ 32 bytes, else `StringTooLong`
//! 3. email ≤ 255 bytes, else `StringTooLong`

mod command;
mod parser;
mod result;

pub use command::Command;
pub use parser::parse;
pub use result::ExecutionResult;
