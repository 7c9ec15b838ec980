//! Shell Environment
//!
//! Main entry point for driving the virtual filesystem.
//! Ties together the command registry, the filesystem and the archive
//! bridge. Commands run one at a time; each line is a single operation on
//! the table.

use std::path::Path;

use tracing::{debug, warn};

use crate::archive::{ArchiveBridge, ArchiveError};
use crate::commands::{Action, CommandContext, CommandOutput, CommandRegistry, CommandResult};
use crate::config::Config;
use crate::error::{Error, ShellError};
use crate::fs::VirtualFs;

/// Options for creating a Shell.
#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Flush to the archive after every command that changed the table.
    pub autosave: bool,
}

/// One executed line of a script.
#[derive(Debug, Clone)]
pub struct ScriptLine {
    pub number: usize,
    pub command: String,
    pub result: CommandResult,
}

/// Outcome of running a script.
#[derive(Debug, Clone, Default)]
pub struct ScriptReport {
    pub lines: Vec<ScriptLine>,
    /// The script ran `exit`.
    pub exited: bool,
}

impl ScriptReport {
    pub fn failures(&self) -> usize {
        self.lines.iter().filter(|l| l.result.exit_code != 0).count()
    }
}

/// The shell: one filesystem, one archive, one command stream.
pub struct Shell {
    fs: VirtualFs,
    registry: CommandRegistry,
    bridge: Option<ArchiveBridge>,
    options: ShellOptions,
    finished: bool,
}

impl Shell {
    /// Create a shell over an already loaded filesystem.
    pub fn new(fs: VirtualFs, bridge: Option<ArchiveBridge>, options: ShellOptions) -> Self {
        Self {
            fs,
            registry: CommandRegistry::with_builtins(),
            bridge,
            options,
            finished: false,
        }
    }

    /// A shell with no backing archive; saves are no-ops.
    pub fn in_memory(fs: VirtualFs) -> Self {
        Self::new(fs, None, ShellOptions::default())
    }

    /// Load the configured archive and build a shell over it.
    pub fn open(config: &Config) -> Result<Self, ArchiveError> {
        let (bridge, fs) = ArchiveBridge::open(&config.archive, &config.load_options())?;
        let options = ShellOptions {
            autosave: config.autosave,
        };
        Ok(Self::new(fs, Some(bridge), options))
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFs {
        &mut self.fs
    }

    pub fn bridge(&self) -> Option<&ArchiveBridge> {
        self.bridge.as_ref()
    }

    /// True once `exit` ran successfully.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Prompt shown before each interactive line.
    pub fn prompt(&self) -> String {
        format!("{}$ ", self.fs.pwd())
    }

    /// Write the whole table to the archive.
    pub fn save(&self) -> Result<(), ArchiveError> {
        match &self.bridge {
            Some(bridge) => bridge.save(&self.fs),
            None => {
                debug!("no archive attached, skipping save");
                Ok(())
            }
        }
    }

    /// Run one command line and return its classified outcome.
    pub fn try_exec(&mut self, line: &str) -> Result<CommandOutput, ShellError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Ok(CommandOutput::empty());
        };

        let cmd = self
            .registry
            .get(verb)
            .ok_or_else(|| ShellError::UnknownCommand {
                verb: verb.to_string(),
            })?;

        if !cmd.arity().accepts(args.len()) {
            return Err(ShellError::WrongArity {
                verb: verb.to_string(),
                expected: cmd.arity().describe(),
                got: args.len(),
                usage: cmd.usage(),
            });
        }

        debug!(verb = %verb, ?args, cwd = %self.fs.pwd(), "exec");
        // Autosave failures roll the table back to this copy.
        let snapshot = self.options.autosave.then(|| self.fs.clone());
        let output = cmd.execute(CommandContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            fs: &mut self.fs,
            registry: &self.registry,
        })?;

        match output.action {
            Action::Save => self.save()?,
            Action::Exit => {
                self.save()?;
                self.finished = true;
            }
            Action::None if output.mutated => {
                if let Some(snapshot) = snapshot {
                    if let Err(e) = self.save() {
                        warn!(verb = %verb, error = %e, "autosave failed, reverting");
                        self.fs = snapshot;
                        return Err(e.into());
                    }
                }
            }
            Action::None => {}
        }

        Ok(output)
    }

    /// Run one command line; errors become stderr text.
    pub fn exec(&mut self, line: &str) -> CommandResult {
        match self.try_exec(line) {
            Ok(output) => CommandResult::success(output.stdout),
            Err(e) => CommandResult::with_exit_code(String::new(), e.to_string(), e.exit_code()),
        }
    }

    /// Feed newline-separated commands through the dispatcher.
    ///
    /// Blank lines and `#` comments are skipped. A failing line is reported
    /// and the next line still runs; `exit` ends the script.
    pub fn run_script(&mut self, script: &str) -> ScriptReport {
        let mut report = ScriptReport::default();

        for (idx, raw) in script.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let result = self.exec(line);
            if result.exit_code != 0 {
                warn!(line = idx + 1, command = %line, error = %result.stderr, "script line failed");
            }
            report.lines.push(ScriptLine {
                number: idx + 1,
                command: line.to_string(),
                result,
            });

            if self.finished {
                report.exited = true;
                break;
            }
        }

        report
    }

    /// Read a script file and run it.
    pub fn run_script_file(&mut self, path: &Path) -> Result<ScriptReport, Error> {
        let script = std::fs::read_to_string(path).map_err(|source| Error::Script {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "running startup script");
        Ok(self.run_script(&script))
    }
}
