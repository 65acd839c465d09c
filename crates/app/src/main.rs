use std::fmt;
use std::path::Path;
use std::sync::Arc;

use services::{BrowseService, Clock, QuizSession};
use storage::repository::Storage;

mod builtin;
mod catalog;
mod shell;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidCatalogPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidCatalogPath { raw } => write!(f, "invalid --catalog value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- browse [--db <sqlite_url>] [--catalog <path>]");
    eprintln!("  cargo run -p app -- quiz   [--catalog <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:trainer.sqlite3");
    eprintln!("  --catalog (bundled Hakka vocabulary)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRAINER_DB_URL, TRAINER_CATALOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Browse,
    Quiz,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "browse" => Some(Self::Browse),
            "quiz" => Some(Self::Quiz),
            _ => None,
        }
    }
}

struct Args {
    db_url: String,
    catalog_path: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRAINER_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://trainer.sqlite3".into(), normalize_sqlite_url);
        let mut catalog_path = std::env::var("TRAINER_CATALOG").ok();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalogPath { raw: value });
                    }
                    catalog_path = Some(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            catalog_path,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: browse mode when no mode argument is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Browse,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Browse,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown mode: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown mode")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = Arc::new(match parsed.catalog_path.as_deref() {
        Some(path) => catalog::load_from_file(Path::new(path))?,
        None => builtin::catalog()?,
    });
    log::debug!("catalog loaded with {} entries", catalog.len());

    match cmd {
        Command::Browse => {
            // Open + migrate SQLite at startup. Keep this in the binary glue
            // so core/services stay pure.
            prepare_sqlite_file(&parsed.db_url)?;
            let storage = Storage::sqlite(&parsed.db_url).await?;
            let browse = BrowseService::load(catalog, storage.cursor, Clock::default()).await?;
            shell::run_browse(browse).await?;
        }
        Command::Quiz => {
            // The quiz is never persisted, so quiz mode does not touch the
            // database at all.
            let clock = Clock::default();
            let session = QuizSession::start(catalog, clock.now());
            shell::run_quiz(session, clock)?;
        }
    }

    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
