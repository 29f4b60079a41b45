//! Gridmark CLI - inspect and edit marker-bearing markdown tables

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use gridmark::core::parse::replace_table_block;
#[cfg(feature = "cli")]
use gridmark::{
    add_column_to_focused, add_row_to_focused, app_data_to_markdown, find_table_blocks,
    insert_empty_table, load_table, migrate_settings, parse_markdown_table, validate, Error,
    Settings, ViewMode,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gmk")]
#[command(version)]
#[command(about = "Gridmark - markdown tables with a persistent metadata side channel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Validate every table block in a document
    Check {
        /// Document to check (reads from stdin if not provided)
        input: Option<String>,
    },

    /// Print markup for a new empty table
    New,

    /// Load every table in a document, reconciling against the settings file
    Load {
        /// Document path
        doc: String,

        /// Settings payload file (JSON); created if missing
        #[arg(short, long)]
        state: String,
    },

    /// Add a row to one table in a document
    AddRow {
        /// Document path
        doc: String,

        /// Settings payload file (JSON)
        #[arg(short, long)]
        state: String,

        /// Table id; defaults to the document's only table
        #[arg(short, long)]
        table: Option<String>,
    },

    /// Add a column to one table in a document
    AddColumn {
        /// Document path
        doc: String,

        /// Settings payload file (JSON)
        #[arg(short, long)]
        state: String,

        /// Table id; defaults to the document's only table
        #[arg(short, long)]
        table: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn load_settings(path: &str) -> Result<Settings, Error> {
    if !Path::new(path).exists() {
        return Ok(Settings::default());
    }
    let json = fs::read_to_string(path)?;
    let mut settings = Settings::from_json(&json)?;
    if migrate_settings(&mut settings) {
        eprintln!("note: migrated {} to the current schema", path);
    }
    Ok(settings)
}

#[cfg(feature = "cli")]
fn store_settings(path: &str, settings: &Settings) -> Result<(), Error> {
    fs::write(path, settings.to_json()?)?;
    Ok(())
}

#[cfg(feature = "cli")]
fn run_check(input: Option<&str>) -> Result<i32, Error> {
    let document = read_input(input)?;
    let blocks = find_table_blocks(&document);
    if blocks.is_empty() {
        println!("no table blocks found");
        return Ok(0);
    }

    let mut failures = 0;
    for block in &blocks {
        let parsed = parse_markdown_table(&block.source);
        match validate(&parsed) {
            Ok(()) => {
                let id = parsed.table_id.as_deref().unwrap_or("?");
                println!(
                    "line {:>4}: ok       table {} ({} columns, {} rows)",
                    block.start_line,
                    id,
                    parsed.header_cells.len(),
                    parsed.row_ids.len()
                );
            }
            Err(check) => {
                failures += 1;
                println!("line {:>4}: skipped  {}", block.start_line, check);
            }
        }
    }
    Ok(if failures > 0 { 1 } else { 0 })
}

#[cfg(feature = "cli")]
fn run_load(doc: &str, state: &str) -> Result<i32, Error> {
    let document = fs::read_to_string(doc)?;
    let mut settings = load_settings(state)?;

    let mut code = 0;
    for block in find_table_blocks(&document) {
        match load_table(&mut settings, &block.source, doc, ViewMode::LivePreview) {
            Ok(loaded) => println!(
                "loaded {} ({} columns, {} rows)",
                loaded.table_id,
                loaded.data.columns.len(),
                loaded.data.rows.len()
            ),
            Err(err) => {
                eprintln!("line {}: {}", block.start_line, err);
                code = 1;
            }
        }
    }
    store_settings(state, &settings)?;
    Ok(code)
}

#[cfg(feature = "cli")]
fn run_edit(doc: &str, state: &str, table: Option<&str>, add_column: bool) -> Result<i32, Error> {
    let document = fs::read_to_string(doc)?;
    let mut settings = load_settings(state)?;

    // Find the target block and reconcile it so the edit starts from the
    // current markup, not a stale persisted shape
    let mut target = None;
    for block in find_table_blocks(&document) {
        let parsed = parse_markdown_table(&block.source);
        let matches = match table {
            Some(id) => parsed.table_id.as_deref() == Some(id),
            None => validate(&parsed).is_ok(),
        };
        if matches {
            if target.is_some() && table.is_none() {
                eprintln!("document has several tables; pass --table <id>");
                return Ok(1);
            }
            target = Some(block);
            if table.is_some() {
                break;
            }
        }
    }
    let Some(block) = target else {
        eprintln!("no matching table found in {}", doc);
        return Ok(1);
    };

    let loaded = load_table(&mut settings, &block.source, doc, ViewMode::LivePreview)?;
    let data = if add_column {
        add_column_to_focused(&mut settings, Some(&loaded.focus))?
    } else {
        add_row_to_focused(&mut settings, Some(&loaded.focus))?
    };

    let markup = app_data_to_markdown(&loaded.table_id, &data);
    fs::write(doc, replace_table_block(&document, &block, &markup))?;

    // The document now reflects the edit; lower the dirty flag
    settings.save_state(doc, &loaded.table_id, data, ViewMode::LivePreview, false);
    store_settings(state, &settings)?;

    println!("updated table {} in {}", loaded.table_id, doc);
    Ok(0)
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Check { input } => run_check(input.as_deref()),
        Commands::New => {
            print!("{}", insert_empty_table());
            Ok(0)
        }
        Commands::Load { doc, state } => run_load(&doc, &state),
        Commands::AddRow { doc, state, table } => run_edit(&doc, &state, table.as_deref(), false),
        Commands::AddColumn { doc, state, table } => run_edit(&doc, &state, table.as_deref(), true),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install gridmark --features cli");
    eprintln!("  gmk <COMMAND>");
}
