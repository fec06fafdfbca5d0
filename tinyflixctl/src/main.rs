use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tinyflix_config::ConfigLoader;
use tinyflix_core::catalog::{
    CatalogQuery, CatalogSearchEngine, FilterMode, SortField,
};
use tinyflix_core::format::format_time;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog_file;

use catalog_file::{CatalogRow, load_catalog};

#[derive(Parser)]
#[command(
    name = "tinyflixctl",
    about = "TinyFlix catalog and playback tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search, filter, and sort a JSON catalog
    Catalog {
        /// JSON array of videos
        #[arg(long)]
        file: PathBuf,
        /// Case-insensitive match on title, description, or tags
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, value_enum)]
        filter: Option<FilterArg>,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Print results as JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Render seconds the way the player does
    FormatTime {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// Load configuration and report where it came from
    CheckConfig {
        /// Directory searched for tinyflix.toml / tinyflix.json
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    Recent,
    Popular,
}

impl From<FilterArg> for FilterMode {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::Recent => FilterMode::Recent,
            FilterArg::Popular => FilterMode::Popular,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Title,
    Rating,
    Date,
}

impl From<SortArg> for SortField {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Title => SortField::Title,
            SortArg::Rating => SortField::Rating,
            SortArg::Date => SortField::Date,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Catalog {
            file,
            query,
            filter,
            sort,
            json,
        } => {
            let load = ConfigLoader::new().load()?;
            let videos = load_catalog(&file)?;
            let engine = CatalogSearchEngine::new(load.config.catalog);
            let query = CatalogQuery {
                query,
                filter: filter.map(Into::into),
                sort: sort.map(Into::into),
            };

            let rows = engine
                .run(&query, &videos)
                .into_iter()
                .map(CatalogRow::from_video)
                .collect::<Result<Vec<_>>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    println!("{}", row.to_line());
                }
            }
        }
        Command::FormatTime { seconds } => {
            println!("{}", format_time(seconds)?);
        }
        Command::CheckConfig { root } => {
            let load = ConfigLoader::with_root(root).load()?;
            println!("source: {}", load.source);
            if load.warnings.is_empty() {
                println!("no warnings");
            }
            for warning in &load.warnings.items {
                match &warning.hint {
                    Some(hint) => println!(
                        "warning: {} (hint: {})",
                        warning.message, hint
                    ),
                    None => println!("warning: {}", warning.message),
                }
            }
        }
    }

    Ok(())
}
