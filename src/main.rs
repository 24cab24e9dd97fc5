use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use tocgen::{document, outline, render};

/// Generate a table of contents from rendered HTML.
#[derive(Parser)]
#[command(name = "tocgen", version)]
struct Cli {
    /// Input HTML file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Treat the input as a body fragment (persisted markup) instead
    /// of a full document.
    #[arg(long)]
    fragment: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Extra class appended to the wrapper element's class attribute.
    #[arg(long)]
    class: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_target(false)
        .init();
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("unable to read input file {}", path.display())),
        None => {
            let mut markup = String::new();
            std::io::stdin()
                .read_to_string(&mut markup)
                .context("unable to read markup from stdin")?;
            Ok(markup)
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let markup = read_input(cli.input.as_ref())?;
    let headings = if cli.fragment {
        document::headings_in_fragment(&markup)
    } else {
        document::headings_in_document(&markup)
    };
    tracing::info!(count = headings.len(), "building outline");
    let nested = outline::linear_to_nested(&headings);

    match cli.format {
        Format::Html => {
            let block = render::render_block(&nested, cli.class.as_deref());
            if !block.is_empty() {
                println!("{block}");
            }
        }
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&nested).context("unable to serialize outline")?;
            println!("{json}");
        }
    }

    Ok(())
}
