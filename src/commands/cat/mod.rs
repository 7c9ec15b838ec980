// src/commands/cat/mod.rs
use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn usage(&self) -> &'static str {
        "cat <path>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let content = ctx.fs.cat(&ctx.args[0])?;
        Ok(CommandOutput::text(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::fs::{ErrorKind, VirtualFs};

    fn run(fs: &mut VirtualFs, path: &str) -> Result<CommandOutput, ShellError> {
        let registry = CommandRegistry::new();
        CatCommand.execute(CommandContext {
            args: vec![path.to_string()],
            fs,
            registry: &registry,
        })
    }

    #[test]
    fn test_cat_returns_content_verbatim() {
        let mut fs = VirtualFs::with_files([("dir1/notes.txt", "line one\nline two\n")]).unwrap();
        assert_eq!(run(&mut fs, "dir1/notes.txt").unwrap().stdout, "line one\nline two\n");
    }

    #[test]
    fn test_cat_directory_is_not_found() {
        let mut fs = VirtualFs::with_files([("dir1/notes.txt", "x")]).unwrap();
        let err = run(&mut fs, "dir1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
