//! Command-line front end over a catalog snapshot.
//!
//! Loads one snapshot per invocation (from `--catalog`, `PETALCART_CATALOG`,
//! or the bundled catalog) and renders filtered views of it. `listen` keeps
//! the snapshot for a whole session and re-renders after each selection
//! change read from stdin.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use petalcart::{
    ALL_CATEGORIES, CatalogEntry, CatalogSource, FileCatalogSource, FilterState, ProductId,
    Settings, filter, filter_by_query, logging,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "catalog-filter", version, about = "Filter a cached product catalog")]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Catalog file (JSON document, array, or NDJSON; '-' for stdin)"
    )]
    catalog: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit one JSON object per entry")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter by category and name query.
    Filter {
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Filter by name query only; a blank query lists everything.
    Search { query: String },
    /// Print a single entry by product id.
    Show { id: String },
    /// List the category selector values for this snapshot.
    Categories,
    /// Read `category <label>`, `query <text>`, and `reset` lines from stdin.
    Listen,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.catalog.as_deref())?;
    logging::init(&settings.log_filter);

    // stdin can feed the catalog or the listen commands, not both.
    if matches!(cli.command, Commands::Listen) && settings.catalog_path.as_os_str() == "-" {
        bail!("listen reads commands from stdin; pass the catalog as a file");
    }

    let source = FileCatalogSource::new(&settings.catalog_path);
    let index = source
        .fetch_index()
        .with_context(|| format!("fetching catalog from {}", source.describe()))?;
    info!(source = %source.describe(), entries = index.len(), "catalog ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Filter { category, query } => {
            let view = filter(index.snapshot(), &category, &query);
            render(&mut out, cli.json, &view)?;
        }
        Commands::Search { query } => {
            let view = filter_by_query(index.snapshot(), &query);
            render(&mut out, cli.json, &view)?;
        }
        Commands::Show { id } => {
            let id = ProductId(id);
            let Some(entry) = index.entry(&id) else {
                bail!("unknown product id {id}");
            };
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(entry)?)?;
            } else {
                writeln!(out, "id: {}", entry.id)?;
                writeln!(out, "name: {}", entry.name().unwrap_or("n/a"))?;
                writeln!(out, "price: {}", entry.price)?;
                writeln!(out, "category: {}", entry.category().unwrap_or("n/a"))?;
                if !entry.description.is_empty() {
                    writeln!(out, "description: {}", entry.description)?;
                }
                if !entry.image.is_empty() {
                    writeln!(out, "image: {}", entry.image)?;
                }
            }
        }
        Commands::Categories => {
            let mut categories = vec![ALL_CATEGORIES];
            categories.extend(
                index
                    .categories()
                    .into_iter()
                    .filter(|category| *category != ALL_CATEGORIES),
            );
            if cli.json {
                writeln!(out, "{}", serde_json::to_string(&categories)?)?;
            } else {
                for category in categories {
                    writeln!(out, "{category}")?;
                }
            }
        }
        Commands::Listen => {
            let mut state = FilterState::new(index.into_snapshot());
            render(&mut out, cli.json, state.filtered())?;
            listen(&mut state, io::stdin().lock(), &mut out, cli.json)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn listen(
    state: &mut FilterState,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<()> {
    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading command line {}", idx + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb {
            "category" if !rest.is_empty() => {
                state.set_category(rest);
            }
            "query" => {
                state.set_query(rest);
            }
            "reset" => {
                state.reset();
            }
            _ => {
                warn!(line = idx + 1, command = %line, "ignoring unknown listen command");
                eprintln!("unknown command on line {}: {line}", idx + 1);
                continue;
            }
        }
        if !json {
            writeln!(out, "# category={} query={}", state.category(), state.query())?;
        }
        render(out, json, state.filtered())?;
    }
    Ok(())
}

fn render(out: &mut impl Write, json: bool, entries: &[CatalogEntry]) -> Result<()> {
    for entry in entries {
        if json {
            writeln!(out, "{}", serde_json::to_string(entry)?)?;
        } else {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                entry.id,
                entry.name().unwrap_or(""),
                entry.price,
                entry.category().unwrap_or("")
            )?;
        }
    }
    out.flush()?;
    Ok(())
}
