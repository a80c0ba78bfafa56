use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docs_header::catalog::source::HttpCatalogSource;
use docs_header::config::SiteConfig;
use docs_header::header::apply_versioning;
use docs_header::render::surface::InMemoryPage;

#[derive(Parser)]
#[command(name = "docs-header")]
#[command(version, about = "Resolve documentation versioning for a page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the versions manifest and render the header fragments for a page
    Resolve {
        /// Site base URL the manifest is fetched from
        #[arg(long)]
        base_url: String,

        /// Path of the page being viewed, e.g. /docs/v2.1.0/index.html
        #[arg(long)]
        page_path: String,

        /// Site layout configuration (JSON); defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the selection as JSON instead of the rendered fragments
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            base_url,
            page_path,
            config,
            json,
        } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(resolve(base_url, page_path, config, json)),
    }
}

async fn resolve(
    base_url: String,
    page_path: String,
    config_path: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SiteConfig::from_json(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => SiteConfig::default(),
    };

    let source = HttpCatalogSource::new(&base_url, &config);
    let mut page = InMemoryPage::default();

    let selection = apply_versioning(&config, &source, &page_path, &mut page).await;

    let Some(selection) = selection else {
        // Manifest unavailable: versioning degrades to nothing, as on a page.
        println!("no versioning available");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
        return Ok(());
    }

    if let Some(banner) = &page.banner {
        println!("--- banner ---");
        print!("{banner}");
    }
    if let Some(suffix) = &page.title_suffix {
        println!("--- title suffix ---");
        println!("{suffix}");
    }
    println!("--- footer ---");
    println!("{}", page.footer);

    Ok(())
}
