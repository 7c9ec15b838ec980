// src/commands/nano/mod.rs
use crate::commands::{Arity, Command, CommandContext, CommandOutput};
use crate::error::ShellError;

/// Writes a file in one go: `nano <path> <content...>`.
pub struct NanoCommand;

impl Command for NanoCommand {
    fn name(&self) -> &'static str {
        "nano"
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(1)
    }

    fn usage(&self) -> &'static str {
        "nano <path> <content...>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let filename = &ctx.args[0];
        let content = ctx.args[1..].join(" ");
        ctx.fs.nano(filename, &content)?;
        Ok(CommandOutput::mutation(format!("File {} created/updated.", filename)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::fs::{ErrorKind, VirtualFs};

    fn run(fs: &mut VirtualFs, args: &[&str]) -> Result<CommandOutput, ShellError> {
        let registry = CommandRegistry::new();
        NanoCommand.execute(CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            fs,
            registry: &registry,
        })
    }

    #[test]
    fn test_nano_joins_content_tokens() {
        let mut fs = VirtualFs::new();
        let out = run(&mut fs, &["file.txt", "Test", "content", "here"]).unwrap();
        assert_eq!(out.stdout, "File file.txt created/updated.");
        assert!(out.mutated);
        assert_eq!(fs.cat("file.txt").unwrap(), "Test content here");
    }

    #[test]
    fn test_nano_overwrite() {
        let mut fs = VirtualFs::new();
        run(&mut fs, &["file.txt", "First", "content"]).unwrap();
        run(&mut fs, &["file.txt", "Updated", "content"]).unwrap();
        assert_eq!(fs.cat("file.txt").unwrap(), "Updated content");
    }

    #[test]
    fn test_nano_without_content_writes_empty_file() {
        let mut fs = VirtualFs::new();
        run(&mut fs, &["empty.txt"]).unwrap();
        assert_eq!(fs.cat("empty.txt").unwrap(), "");
    }

    #[test]
    fn test_nano_on_directory() {
        let mut fs = VirtualFs::with_files([("dir1/a", "")]).unwrap();
        let err = run(&mut fs, &["dir1", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IsADirectory);
    }
}
