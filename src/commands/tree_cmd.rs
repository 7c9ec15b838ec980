use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct TreeCommand;

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn arity(&self) -> Arity {
        Arity::Range(0, 1)
    }

    fn usage(&self) -> &'static str {
        "tree [path]"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let root = ctx.args.first().map(String::as_str);
        let rendered = ctx.fs.tree(root)?;
        Ok(CommandOutput::text(rendered))
    }
}
