use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countrypick
#[derive(Debug, Parser)]
#[command(
    name = "countrypick",
    version,
    about = "Browse, search and pick countries by phone dialing code"
)]
pub struct CliArgs {
    /// Country table to load (.json, .json.gz, .bin, .bin.gz). Defaults to the bundled table
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// JSON file describing the home section (defaults to Australia + Norfolk Island)
    #[arg(long = "home", global = true, conflicts_with = "no_home")]
    pub home: Option<PathBuf>,

    /// Disable the pinned home section
    #[arg(long = "no-home", global = true)]
    pub no_home: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the grouped list: section headers, rows and the index bar
    Sections,

    /// Print the rows matching a search query (case-insensitive substring)
    Search {
        /// Text typed into the search field
        query: String,
    },

    /// Pick the row at SECTION/ROW and print the delivered country
    Select {
        /// Filter first, then pick from the flat result list
        #[arg(short = 'q', long = "query")]
        query: Option<String>,
        /// Section position (0 is the home section when enabled)
        section: usize,
        /// Row position inside the section
        row: usize,
    },

    /// Lookup a country by ISO code
    Country {
        /// ISO code (e.g. AU, nf)
        code: String,
    },

    /// List countries whose dialing code starts with a prefix
    Dial {
        /// Dial code prefix, with or without "+" (e.g. +61, 1)
        prefix: String,
    },

    /// Show a summary of the loaded table and section index
    Stats,

    /// Write a binary snapshot of the loaded table
    Build {
        /// Output path (.bin or .bin.gz); defaults to the input path plus a snapshot suffix
        out: Option<PathBuf>,
        /// Skip gzip compression
        #[arg(long)]
        plain: bool,
    },
}
