// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod exit_cmd;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod nano;
pub mod pwd;
pub mod registry;
pub mod save_cmd;
pub mod tree_cmd;
pub mod types;

pub use registry::CommandRegistry;
pub use types::{Action, Arity, Command, CommandContext, CommandOutput, CommandResult};
