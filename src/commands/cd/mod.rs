// src/commands/cd/mod.rs
use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn usage(&self) -> &'static str {
        "cd <path>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        ctx.fs.cd(&ctx.args[0])?;
        Ok(CommandOutput::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::fs::{ErrorKind, VirtualFs};

    fn run(fs: &mut VirtualFs, path: &str) -> Result<CommandOutput, ShellError> {
        let registry = CommandRegistry::new();
        CdCommand.execute(CommandContext {
            args: vec![path.to_string()],
            fs,
            registry: &registry,
        })
    }

    #[test]
    fn test_cd_moves_cursor() {
        let mut fs = VirtualFs::with_files([("dir1/file2.txt", "B")]).unwrap();
        let out = run(&mut fs, "dir1").unwrap();
        assert_eq!(out.stdout, "");
        assert_eq!(fs.pwd(), "/dir1");
        run(&mut fs, "..").unwrap();
        assert_eq!(fs.pwd(), "/");
    }

    #[test]
    fn test_cd_missing_directory() {
        let mut fs = VirtualFs::new();
        let err = run(&mut fs, "nowhere").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(fs.pwd(), "/");
    }
}
