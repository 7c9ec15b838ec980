use crate::commands::{Action, Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

/// Flush the table to the archive without leaving the shell.
pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &'static str {
        "save"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(0)
    }

    fn usage(&self) -> &'static str {
        "save"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text("Saved.").with_action(Action::Save))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::fs::VirtualFs;

    #[test]
    fn test_save_requests_flush() {
        let mut fs = VirtualFs::new();
        let registry = CommandRegistry::new();
        let out = SaveCommand
            .execute(CommandContext { args: vec![], fs: &mut fs, registry: &registry })
            .unwrap();
        assert_eq!(out.stdout, "Saved.");
        assert_eq!(out.action, Action::Save);
    }
}
