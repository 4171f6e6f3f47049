use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fragz", bin_name = "fragz", version)]
#[command(about = "Stitch ordered Mermaid fragments into one diagram", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the fragments and fragz.json (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Merge fragments into the output file and copy it to the clipboard (default)
    #[command(alias = "m")]
    Merge {
        /// Fragment files, in order (overrides fragz.json)
        fragments: Vec<String>,

        /// Output file (overrides fragz.json)
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Do not touch the clipboard
        #[arg(long)]
        no_clipboard: bool,

        /// Also print the merged document to stdout
        #[arg(long)]
        stdout: bool,
    },

    /// Show which fragments are present without writing anything
    #[command(alias = "ls")]
    Check {
        /// Fragment files, in order (overrides fragz.json)
        fragments: Vec<String>,
    },

    /// Print the effective configuration
    Config,

    /// Write a starter fragz.json
    Init {
        /// Overwrite an existing fragz.json
        #[arg(long)]
        force: bool,
    },
}
