// src/commands/mkdir/mod.rs
use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn usage(&self) -> &'static str {
        "mkdir <path>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let dir = &ctx.args[0];
        ctx.fs.mkdir(dir)?;
        Ok(CommandOutput::mutation(format!("Directory {} created.", dir)))
    }
}
