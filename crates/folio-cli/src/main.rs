mod commands;
mod reader;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use folio_config::{Config, ReaderConfig};
use folio_engine::content::StorageFormat;
use folio_engine::models::RecordKey;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", version, about = "Read and author books, business plans and blog posts")]
struct Cli {
    /// Content directory; defaults to `content_path` from the config file
    #[arg(long, global = true, value_name = "DIR")]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Browse records in the terminal reader (default)
    Read,
    /// List stored records
    List,
    /// Print a record as HTML, outline first
    Html { key: RecordKey },
    /// Print a record's table of contents
    Toc { key: RecordKey },
    /// Print a record's content the way an editor should show it
    Edit { key: RecordKey },
    /// Save editor input to a record, creating it if needed
    Save {
        key: RecordKey,
        /// Title for the record
        #[arg(long)]
        title: Option<String>,
        /// Read input from this file instead of stdin
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// Settings resolved from the command line and the config file.
pub struct Settings {
    pub content_path: PathBuf,
    pub reader: ReaderConfig,
    pub storage_format: StorageFormat,
}

impl Settings {
    fn resolve(content_override: Option<PathBuf>) -> Result<Self> {
        let config_path = Config::config_path();
        let config = Config::load()
            .with_context(|| format!("Failed to load config file {}", config_path.display()))?;

        let config = match (content_override, config) {
            (Some(path), Some(config)) => Config {
                content_path: path,
                ..config
            },
            (Some(path), None) => Config::new(path),
            (None, Some(config)) => config,
            (None, None) => bail!(
                "No content directory given and no config file found at {}\n\
                 Pass --content <DIR> or create the config file",
                config_path.display()
            ),
        };

        log::debug!(
            "Using content directory {} ({:?} storage)",
            config.content_path.display(),
            config.authoring.storage_format
        );

        Ok(Self {
            content_path: config.content_path,
            reader: config.reader,
            storage_format: storage_format(config.authoring.storage_format),
        })
    }
}

/// The engine's storage convention for the configured one.
fn storage_format(format: folio_config::StorageFormat) -> StorageFormat {
    match format {
        folio_config::StorageFormat::Object => StorageFormat::Object,
        folio_config::StorageFormat::String => StorageFormat::String,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.content)?;

    match cli.command.unwrap_or(Command::Read) {
        Command::Read => reader::run(&settings),
        Command::List => commands::list(&settings),
        Command::Html { key } => commands::html(&settings, &key),
        Command::Toc { key } => commands::toc(&settings, &key),
        Command::Edit { key } => commands::edit(&settings, &key),
        Command::Save { key, title, file } => commands::save(&settings, key, title, file),
    }
}
