// src/commands/ls/mod.rs
use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(0)
    }

    fn usage(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text(ctx.fs.ls().join("\n")))
    }
}
