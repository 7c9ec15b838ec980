use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser, ValueEnum};
use tracing::debug;
use zip_shell::{CommandResult, Config, Error, Shell};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "zip-shell")]
#[command(about = "A shell over a filesystem stored in a single zip archive")]
#[command(version)]
#[command(group(ArgGroup::new("source").required(true).multiple(true).args(["archive", "config"])))]
struct Cli {
    /// Zip archive backing the filesystem (overrides the config file)
    #[arg()]
    archive: Option<PathBuf>,

    /// TOML config file naming the archive and an optional startup script
    #[arg(long)]
    config: Option<PathBuf>,

    /// Startup script whose lines run before the session
    #[arg(long)]
    script: Option<PathBuf>,

    /// Run these ';'-separated commands, then save and exit
    #[arg(short = 'c')]
    commands: Option<String>,

    /// Save after every command that changes the filesystem
    #[arg(long)]
    autosave: bool,

    /// Start empty if the archive does not exist yet
    #[arg(long)]
    create: bool,

    /// Print each result as JSON (stdout, stderr, exitCode)
    #[arg(long)]
    json: bool,

    #[arg(long, short = 'l', default_value = "warn", value_enum)]
    log_level: LogLevel,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.log_level);
    debug!("Parsed CLI arguments: {cli:?}");

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn build_config(cli: &Cli) -> Result<Config, Error> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(cli.archive.clone().unwrap_or_default()),
    };
    if let Some(archive) = &cli.archive {
        config.archive = archive.clone();
    }
    if cli.script.is_some() {
        config.startup_script = cli.script.clone();
    }
    config.autosave |= cli.autosave;
    config.create_if_missing |= cli.create;
    Ok(config)
}

fn run(cli: &Cli) -> Result<u8, Error> {
    let config = build_config(cli)?;

    // A malformed archive stops here, before any command runs.
    let mut shell = Shell::open(&config)?;

    if let Some(script) = &config.startup_script {
        let report = shell.run_script_file(script)?;
        for line in &report.lines {
            emit(&line.result, cli.json);
        }
        if report.exited {
            return Ok(0);
        }
    }

    if let Some(commands) = &cli.commands {
        let mut last = 0;
        for line in commands.split(';').map(str::trim).filter(|l| !l.is_empty()) {
            let result = shell.exec(line);
            emit(&result, cli.json);
            last = result.exit_code;
            if shell.is_finished() {
                return Ok(status(last));
            }
        }
        shell.save()?;
        return Ok(status(last));
    }

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", shell.prompt());
            let _ = std::io::stdout().flush();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|source| Error::Script {
            path: "<stdin>".to_string(),
            source,
        })?;

        let result = shell.exec(&line);
        emit(&result, cli.json);
        if shell.is_finished() {
            return Ok(0);
        }
    }

    // End of input behaves like `exit`.
    shell.save()?;
    Ok(0)
}

fn status(exit_code: i32) -> u8 {
    u8::try_from(exit_code).unwrap_or(1)
}

fn emit(result: &CommandResult, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "stdout": result.stdout,
                "stderr": result.stderr,
                "exitCode": result.exit_code,
            })
        );
        return;
    }
    if !result.stdout.is_empty() {
        println!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        eprintln!("Error: {}", result.stderr);
    }
}
