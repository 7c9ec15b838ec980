use crate::commands::{Action, Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(0)
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text("Exiting...").with_action(Action::Exit))
    }
}
