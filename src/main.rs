mod commands;
mod surface;
mod wiring;

use clap::{Parser, Subcommand};
use glossa_core::{config, language::LanguageId, traits::SelectionStore};
use glossa_store::SqliteSelectionStore;
use std::sync::Arc;
use surface::{parse_markers, ConsoleSurface, Marker};

#[derive(Parser)]
#[command(
    name = "glossa",
    version,
    about = "glossa: tiered translation lookup with lazy catalogs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "glossa.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a key in the active language.
    Translate {
        /// Dot-separated key, e.g. `nav.home`.
        key: String,
        /// Values for `{0}`, `{1}`, ...
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// List selectable languages.
    Languages,
    /// Change the active language and save the selection.
    Switch {
        language: String,
        /// Marked elements to re-render, one `element = key` per line.
        #[arg(short, long)]
        markers: Option<String>,
    },
    /// Render marked elements in the active language.
    Render {
        /// Marked elements, one `element = key` per line.
        file: String,
    },
    /// Show engine state.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.glossa.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Translate { key, args } => {
            let surface = Arc::new(ConsoleSurface::new(Vec::new(), std::io::stdout()));
            wiring::start(&cfg, surface).await?;
            println!("{}", commands::translate(&key, &args));
        }
        Commands::Languages => {
            let surface = Arc::new(ConsoleSurface::new(Vec::new(), std::io::stdout()));
            let controller = wiring::start(&cfg, surface.clone()).await?;
            let active = surface
                .selected()
                .unwrap_or_else(|| controller.resolver().language());
            println!("{}", commands::languages(&surface.languages(), &active));
        }
        Commands::Switch { language, markers } => {
            let language = LanguageId::parse(&language)?;
            let markers = match markers {
                Some(path) => read_markers(&path)?,
                None => Vec::new(),
            };
            // Only the post-switch render goes to stdout.
            let surface = Arc::new(ConsoleSurface::new(markers, std::io::stdout()));
            surface.set_muted(true);
            let controller = wiring::start(&cfg, surface.clone()).await?;
            surface.set_muted(false);
            let outcome = controller.request_switch(language).await;
            eprintln!("{}", commands::describe_outcome(&outcome));
        }
        Commands::Render { file } => {
            let markers = read_markers(&file)?;
            let surface = Arc::new(ConsoleSurface::new(markers, std::io::stdout()));
            wiring::start(&cfg, surface).await?;
        }
        Commands::Status => {
            let surface = Arc::new(ConsoleSurface::new(Vec::new(), std::io::sink()));
            let controller = wiring::start(&cfg, surface).await?;
            let persisted = SqliteSelectionStore::new(&cfg.selection)
                .await?
                .selected_language()
                .await?;
            println!("{}", commands::status(&controller, persisted.as_ref()));
        }
    }

    Ok(())
}

fn read_markers(path: &str) -> anyhow::Result<Vec<Marker>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read markers {path}: {e}"))?;
    Ok(parse_markers(&text)?)
}
