// src/commands/types.rs
use crate::error::ShellError;
use crate::fs::VirtualFs;
use super::registry::CommandRegistry;

/// How many arguments a verb takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Range(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(n) => count >= n,
        }
    }

    pub fn describe(&self) -> String {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        match *self {
            Arity::Exact(n) => format!("{} argument{}", n, plural(n)),
            Arity::Range(min, max) => format!("{} to {} arguments", min, max),
            Arity::AtLeast(n) => format!("at least {} argument{}", n, plural(n)),
        }
    }
}

/// What the shell should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    /// Flush the table to the archive.
    Save,
    /// Flush, then stop accepting commands.
    Exit,
}

/// Successful command output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub action: Action,
    /// The table changed.
    pub mutated: bool,
}

impl CommandOutput {
    pub fn text(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), ..Default::default() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn mutation(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), action: Action::None, mutated: true }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }
}

/// Command execution result, as a front-end prints it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }
}

/// Command execution context
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub fs: &'a mut VirtualFs,
    pub registry: &'a CommandRegistry,
}

/// A shell verb.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn arity(&self) -> Arity;
    fn usage(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError>;
}
