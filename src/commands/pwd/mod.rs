// src/commands/pwd/mod.rs
use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(0)
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text(ctx.fs.pwd()))
    }
}
