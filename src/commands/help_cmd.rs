use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn arity(&self) -> Arity {
        Arity::Range(0, 1)
    }

    fn usage(&self) -> &'static str {
        "help [command]"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        if let Some(verb) = ctx.args.first() {
            return match ctx.registry.get(verb) {
                Some(cmd) => Ok(CommandOutput::text(format!("usage: {}", cmd.usage()))),
                None => Err(ShellError::UnknownCommand { verb: verb.clone() }),
            };
        }

        let mut stdout = String::from("Available commands:\n");
        for name in ctx.registry.names() {
            if let Some(cmd) = ctx.registry.get(name) {
                stdout.push_str(&format!("  {}\n", cmd.usage()));
            }
        }
        stdout.push_str("Paths may be absolute or relative to the current directory.");

        Ok(CommandOutput::text(stdout))
    }
}
