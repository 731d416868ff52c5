//! Command-line view of the clean code attribute catalog.
//!
//! Prints the full attribute table, the category of selected attributes, or
//! the members of one category. Output is tab-separated text by default or
//! NDJSON with `--json` (or `CLEAN_CODE_OUTPUT=json`).

use anyhow::{Context, Result, bail};
use clean_code_attributes::{
    AttributeEntry, CATALOG, CleanCodeAttributeCategory, OutputFormat, render_entries,
    render_snapshot, split_names,
};
use std::env;
use std::io::{self, Write};

fn main() {
    if let Err(err) = run() {
        eprintln!("attribute-catalog: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let output = match cli.command {
        Command::Table => {
            let entries: Vec<AttributeEntry> = CATALOG
                .list_attributes()
                .iter()
                .copied()
                .map(AttributeEntry::from)
                .collect();
            render_entries(&entries, cli.format)?
        }
        Command::Lookup(names) => {
            let mut entries = Vec::with_capacity(names.len());
            for name in &names {
                let (attribute, _) = CATALOG
                    .lookup(name)
                    .with_context(|| format!("looking up attribute {name}"))?;
                entries.push(AttributeEntry::from(attribute));
            }
            render_entries(&entries, cli.format)?
        }
        Command::Category(name) => {
            let category: CleanCodeAttributeCategory = name.parse()?;
            let entries: Vec<AttributeEntry> = CATALOG
                .attributes_in(category)
                .into_iter()
                .map(AttributeEntry::from)
                .collect();
            render_entries(&entries, cli.format)?
        }
        Command::Snapshot => {
            let mut rendered = render_snapshot(&CATALOG.snapshot())?;
            rendered.push('\n');
            rendered
        }
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("writing catalog output")?;
    stdout.flush().context("flushing catalog output")
}

const MODES_EXCLUSIVE: &str =
    "--snapshot, --category, and attribute names are mutually exclusive (use --category once)";

struct Cli {
    command: Command,
    format: OutputFormat,
}

enum Command {
    Table,
    Lookup(Vec<String>),
    Category(String),
    Snapshot,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut format = OutputFormat::from_env();
        let mut category: Option<String> = None;
        let mut snapshot = false;
        let mut names: Vec<String> = Vec::new();
        let mut saw_names = false;

        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => format = OutputFormat::Json,
                "--text" => format = OutputFormat::Text,
                "--snapshot" => snapshot = true,
                "--category" | "-c" => {
                    let value = args
                        .next()
                        .with_context(|| "--category requires a category name")?;
                    if category.is_some() {
                        bail!(MODES_EXCLUSIVE);
                    }
                    category = Some(value.trim().to_ascii_uppercase());
                }
                "--help" | "-h" => usage(0),
                flag if flag.starts_with('-') => bail!("unknown option: {flag}"),
                _ => {
                    saw_names = true;
                    names.extend(split_names(&arg));
                }
            }
        }

        if saw_names && names.is_empty() {
            bail!("no attribute names found in arguments");
        }

        let command = match (snapshot, category, saw_names) {
            (true, None, false) => Command::Snapshot,
            (false, Some(category), false) => Command::Category(category),
            (false, None, true) => Command::Lookup(names),
            (false, None, false) => Command::Table,
            _ => bail!(MODES_EXCLUSIVE),
        };

        Ok(Self { command, format })
    }
}

fn usage(code: i32) -> ! {
    let attributes: Vec<&str> = CATALOG.list_attributes().iter().map(|a| a.as_str()).collect();
    let categories: Vec<&str> = CATALOG.list_categories().iter().map(|c| c.as_str()).collect();
    eprintln!(
        "Usage: attribute-catalog [--json | --text] [ATTRIBUTE... | --category CATEGORY | --snapshot]\n\nWith no arguments, prints every attribute and its category.\n\nOptions:\n  --json             Emit one JSON object per line.\n  --text             Emit tab-separated text (default; CLEAN_CODE_OUTPUT=json overrides).\n  --category, -c     List the attributes belonging to CATEGORY.\n  --snapshot         Print the whole table as a single JSON document.\n\nAttributes: {}\nCategories: {}",
        attributes.join(", "),
        categories.join(", ")
    );
    std::process::exit(code);
}
