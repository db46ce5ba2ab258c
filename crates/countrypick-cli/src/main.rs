//! countrypick — Command-line host for countrypick-core
//!
//! Plays the part of the list widget: it asks the picker for sections, rows
//! and cells and prints them, feeds search text in, and taps rows.
//!
//! Usage examples
//! --------------
//!
//! - Show the grouped list with the home section first
//!   $ countrypick sections
//!
//! - Search (case- and accent-insensitive substring)
//!   $ countrypick search ral
//!
//! - Pick Norfolk Island from the home section
//!   $ countrypick select 0 1
//!
//! - Pick the second search hit
//!   $ countrypick select --query aus 0 1
//!
//! - Use another home region, or none
//!   $ countrypick --home nz.json sections
//!   $ countrypick --no-home sections
//!
//! - Write a snapshot of a custom table
//!   $ countrypick --input my_countries.json build my_countries.bin.gz
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use countrypick_core::loader::common_io::snapshot_path_for;
use countrypick_core::model::SNAPSHOT_SUFFIX;
use countrypick_core::prelude::*;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Load table (bundled unless --input)
    let table = match &args.input {
        Some(path) => CountryTable::load_from_path(path)
            .with_context(|| format!("loading country table from {}", path.display()))?,
        None => CountryTable::builtin().context("loading built-in country table")?,
    };

    // Resolve home section
    let home = if args.no_home {
        None
    } else {
        match &args.home {
            Some(path) => Some(
                HomeRegion::load_from_path(path)
                    .with_context(|| format!("loading home region from {}", path.display()))?,
            ),
            None => Some(HomeRegion::default()),
        }
    };

    let mut picker = CountryPicker::new(table, home);

    match args.command {
        Commands::Sections => print_grouped(&picker),

        Commands::Search { query } => {
            picker.update_search(&query);
            if picker.is_filtering() {
                print_filtered(&picker, &query);
            } else {
                print_grouped(&picker);
            }
        }

        Commands::Select {
            query,
            section,
            row,
        } => {
            if let Some(q) = &query {
                picker.update_search(q);
            }

            let (tx, rx) = crossbeam_channel::bounded::<Country>(1);
            let delegate: Rc<dyn CountrySelectionDelegate> = Rc::new(tx);
            picker.set_delegate(&delegate);

            if picker.select(section, row).is_none() {
                bail!(
                    "no row {row} in section {section} ({} sections, {} rows there)",
                    picker.section_count(),
                    picker.row_count(section)
                );
            }

            let country = rx
                .try_recv()
                .context("selection was not delivered to the delegate")?;
            println!("Selected: {}", country.name());
            println!("ISO: {}", country.iso_code());
            println!("Dial code: {}", country.formatted_dial_code());
            if let Some(flag) = country.flag() {
                println!("Flag: {} ({})", flag.emoji(), flag.code());
            }
        }

        Commands::Country { code } => {
            let c = lookup_country(picker.table(), &code)?;
            println!("Country: {}", c.name());
            println!("ISO: {}", c.iso_code());
            println!("Dial code: {}", c.formatted_dial_code());
            println!(
                "Section: {}",
                countrypick_core::text::section_initial(c.name())
            );
        }

        Commands::Dial { prefix } => {
            let matches = picker.table().find_by_dial_code(&prefix);
            if matches.is_empty() {
                println!("No countries found with dial code: {prefix}");
            } else {
                for c in matches {
                    print_row(&CountryCell::from(c));
                }
            }
        }

        Commands::Stats => {
            let stats = picker.stats();
            println!("Picker statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Sections: {}", stats.sections);
            println!("  Rows (grouped): {}", stats.rows);
        }

        Commands::Build { out, plain } => {
            let out = out.unwrap_or_else(|| {
                let source = args
                    .input
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("countries.json"));
                snapshot_path_for(&source, SNAPSHOT_SUFFIX)
            });
            let mode = if plain {
                CompressionMode::None
            } else {
                CompressionMode::preferred()
            };
            picker
                .table()
                .write_snapshot(&out, mode)
                .with_context(|| format!("writing snapshot to {}", out.display()))?;
            println!(
                "Wrote {} countries to {} ({mode:?})",
                picker.table().len(),
                out.display()
            );
        }
    }

    Ok(())
}

fn lookup_country<'a>(table: &'a CountryTable, code: &str) -> anyhow::Result<&'a Country> {
    match table.find_by_iso_code(code) {
        Some(c) => Ok(c),
        None => bail!("no country found for: {code}"),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_grouped(picker: &CountryPicker) {
    for section in 0..picker.section_count() {
        println!("== {}", picker.section_title(section).unwrap_or_default());
        for row in 0..picker.row_count(section) {
            if let Some(cell) = picker.cell(section, row) {
                print_row(&cell);
            }
        }
    }
    if let Some(titles) = picker.section_index_titles() {
        println!("Index: {}", titles.join(" "));
    }
}

fn print_filtered(picker: &CountryPicker, query: &str) {
    let rows = picker.row_count(0);
    if rows == 0 {
        println!("No countries found matching: {query}");
        return;
    }
    for row in 0..rows {
        if let Some(cell) = picker.cell(0, row) {
            print_row(&cell);
        }
    }
}

fn print_row(cell: &CountryCell) {
    let flag = cell.flag.as_ref().map(|f| f.emoji()).unwrap_or_default();
    println!("  {flag:<2} {:<40} {}", cell.title, cell.phone);
}
