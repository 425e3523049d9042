use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use offerboard_core::model::Credentials;
use services::{AppServices, AuthService, Clock, DashboardService, FeedConfig};
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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

struct DesktopApp {
    auth: Arc<AuthService>,
    dashboard: Arc<DashboardService>,
}

impl UiApp for DesktopApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}

struct Args {
    db_url: String,
    feed_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--feed-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:offerboard.sqlite3");
    eprintln!("  --feed-url taken from OFFERBOARD_FEED_URL");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  OFFERBOARD_DB_URL, OFFERBOARD_FEED_URL");
    eprintln!("  OFFERBOARD_USERNAME, OFFERBOARD_PASSWORD");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("OFFERBOARD_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://offerboard.sqlite3".into(), normalize_sqlite_url);
        let mut feed_url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--feed-url" => {
                    feed_url = Some(require_value(args, "--feed-url")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, feed_url })
    }
}

/// Both variables must be set to replace the preset pair.
fn credentials_from_env() -> Credentials {
    let username = std::env::var("OFFERBOARD_USERNAME").ok();
    let password = std::env::var("OFFERBOARD_PASSWORD").ok();
    match (username, password) {
        (Some(username), Some(password)) => Credentials::new(username, password),
        _ => Credentials::preset(),
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

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;

    let feed = match &parsed.feed_url {
        Some(raw) => FeedConfig::new(raw)?,
        None => FeedConfig::from_env()?,
    };
    info!(endpoint = %feed.endpoint, "offer feed configured");

    let clock = Clock::default_clock();
    let services = AppServices::new(storage, clock, feed, credentials_from_env()).await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        auth: services.auth(),
        dashboard: services.dashboard(),
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev
    // setups; disable it so the dashboard behaves like a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Offerboard")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
