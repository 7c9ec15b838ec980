// src/commands/mv/mod.rs
use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(2)
    }

    fn usage(&self) -> &'static str {
        "mv <source> <destination>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let (src, dst) = (&ctx.args[0], &ctx.args[1]);
        ctx.fs.mv(src, dst)?;
        Ok(CommandOutput::mutation(format!("Moved {} to {}", src, dst)))
    }
}
