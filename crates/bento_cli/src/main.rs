//! Command-line driver for the bento layout engine.
//!
//! # Responsibility
//! - Run one layout operation per invocation against a database file.
//! - Print notices and the resulting order for quick local checks.

use bento_core::catalog::feed_forward_items;
use bento_core::db::{open_db, DbError};
use bento_core::{
    default_log_level, init_logging, EngineConfig, GridItemValidationError, KeyValueStore,
    KvLayoutRepository, LayoutEngine, LayoutRepository, LayoutValidationError, LoggingError,
    Notice, NoticeLevel, Notifier, RepoError, SessionContext, SqliteKeyValueStore, Theme,
    ThemeService, TriggerOutcome,
};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "bento", version, about = "Edit the Feed Forward dashboard layout")]
struct Cli {
    /// SQLite file holding saved preferences.
    #[arg(long, default_value = "bento.sqlite3")]
    db: PathBuf,
    /// Optional TOML file with engine settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Layout(LayoutCommand),
    /// Show or change the color theme.
    Theme { mode: Option<ThemeArg> },
}

#[derive(Debug, Subcommand)]
enum LayoutCommand {
    /// Print the current tile order.
    Show,
    /// Shuffle the tiles (not saved).
    Shuffle,
    /// Drag one tile to a new position and save the result.
    Move { from: usize, to: usize },
    /// Restore the default order and forget the saved one.
    Reset,
    /// Print the navigation target of a tile.
    Open { index: usize },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[derive(Debug)]
enum CliError {
    Config(String),
    Logging(LoggingError),
    Db(DbError),
    Repo(RepoError),
    Catalog(GridItemValidationError),
    Layout(LayoutValidationError),
    Usage(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(message) => write!(f, "config: {message}"),
            Self::Logging(err) => write!(f, "logging: {err}"),
            Self::Db(err) => write!(f, "database: {err}"),
            Self::Repo(err) => write!(f, "storage: {err}"),
            Self::Catalog(err) => write!(f, "catalog: {err}"),
            Self::Layout(err) => write!(f, "layout: {err}"),
            Self::Usage(message) => write!(f, "{message}"),
        }
    }
}

impl Error for CliError {}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<GridItemValidationError> for CliError {
    fn from(value: GridItemValidationError) -> Self {
        Self::Catalog(value)
    }
}

impl From<LayoutValidationError> for CliError {
    fn from(value: LayoutValidationError) -> Self {
        Self::Layout(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bento: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let config = load_config(cli.config.as_deref())?;
    let conn = open_db(&cli.db)?;
    let store = SqliteKeyValueStore::new(&conn);
    let session = SessionContext::new();
    let themes = ThemeService::load(store, config.theme_key.as_str(), session.clone());

    let command = match cli.command {
        Command::Theme { mode } => return run_theme(&themes, mode),
        Command::Layout(command) => command,
    };

    let repo = KvLayoutRepository::new(store, config.layout_key.as_str());
    let mut engine = LayoutEngine::initialize(
        feed_forward_items()?,
        repo,
        session,
        print_notice,
        &config,
    )?;

    info!("event=cli_command module=cli status=start command={command:?}");
    match command {
        LayoutCommand::Show => {}
        LayoutCommand::Shuffle => {
            expect_started(engine.shuffle())?;
            engine.wait_for_transition()?;
        }
        LayoutCommand::Reset => {
            expect_started(engine.reset())?;
            engine.wait_for_transition()?;
        }
        LayoutCommand::Move { from, to } => {
            if to >= engine.layout().len() {
                return Err(CliError::Usage(format!("no tile at index {to}")));
            }
            engine.toggle_edit_mode()?;
            if !engine.begin_drag(from) {
                return Err(CliError::Usage(format!("no tile at index {from}")));
            }
            engine.drag_over(to);
            engine.end_drag();
            engine.toggle_edit_mode()?;
        }
        LayoutCommand::Open { index } => {
            let destination = engine
                .activate(index)
                .ok_or_else(|| CliError::Usage(format!("no tile at index {index}")))?;
            println!("{destination}");
            return Ok(());
        }
    }

    print_layout(&engine);
    Ok(())
}

fn run_theme<S: KeyValueStore>(
    themes: &ThemeService<S>,
    mode: Option<ThemeArg>,
) -> Result<(), CliError> {
    let theme = match mode {
        None => themes.theme(),
        Some(ThemeArg::Toggle) => themes.toggle_theme()?,
        Some(ThemeArg::Light) => {
            themes.set_theme(Theme::Light)?;
            Theme::Light
        }
        Some(ThemeArg::Dark) => {
            themes.set_theme(Theme::Dark)?;
            Theme::Dark
        }
    };
    println!("theme: {}", theme.as_str());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, CliError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|err| CliError::Config(format!("cannot read `{}`: {err}", path.display())))?;
    toml::from_str(&content)
        .map_err(|err| CliError::Config(format!("invalid `{}`: {err}", path.display())))
}

fn expect_started(outcome: TriggerOutcome) -> Result<(), CliError> {
    match outcome {
        TriggerOutcome::Started => Ok(()),
        TriggerOutcome::Busy => Err(CliError::Usage("a transition is already running".into())),
        TriggerOutcome::Editing => Err(CliError::Usage("finish editing the layout first".into())),
    }
}

fn print_notice(notice: Notice) {
    let marker = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
    };
    println!("[{marker}] {}", notice.message);
}

fn print_layout<R, N>(engine: &LayoutEngine<R, N>)
where
    R: LayoutRepository,
    N: Notifier,
{
    println!("source: {:?}", engine.restore_source());
    for (index, item) in engine.layout().items().iter().enumerate() {
        println!(
            "{index:>2}  {:<24} {:<8} {}",
            item.id,
            format!("{:?}", item.size).to_lowercase(),
            item.destination
        );
    }
}
