//! # CLI Layer
//!
//! One client of the fragz API. This is the only code that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Exit codes are decided by `main.rs`: any `Err` returned from [`run`] exits 1.
//! Missing or unreadable fragments come back as diagnostics, so such a run
//! still exits 0.

use super::print::{print_config, print_document, print_messages, print_statuses, MessageSink};
use super::setup::{Cli, Commands};
use clap::Parser;
use fragz::api::{ConfigAction, FragzApi, MergeOptions};
use fragz::clipboard::SystemClipboard;
use fragz::config::FragzConfig;
use fragz::error::{FragzError, Result};
use fragz::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: FragzApi<FileStore, SystemClipboard>,
    config: FragzConfig,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Merge {
            fragments,
            output,
            no_clipboard,
            stdout,
        }) => handle_merge(&mut ctx, fragments, output, no_clipboard, stdout),
        Some(Commands::Check { fragments }) => handle_check(&ctx, fragments),
        Some(Commands::Config) => handle_config(&ctx),
        Some(Commands::Init { force }) => handle_init(&ctx, force),
        None => handle_merge(&mut ctx, Vec::new(), None, false, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    // init must work even when an existing fragz.json is broken
    let config = match cli.command {
        Some(Commands::Init { .. }) => FragzConfig::default(),
        _ => FragzConfig::load(&root)?,
    };

    let api = FragzApi::new(FileStore::new(root.clone()), SystemClipboard, root);
    Ok(AppContext {
        api,
        config,
        verbose: cli.verbose,
    })
}

fn handle_merge(
    ctx: &mut AppContext,
    fragments: Vec<String>,
    output: Option<String>,
    no_clipboard: bool,
    stdout: bool,
) -> Result<()> {
    let config = ctx
        .config
        .clone()
        .with_fragments(fragments)
        .with_output_path(output);
    let options = MergeOptions {
        copy_to_clipboard: !no_clipboard,
    };

    let sink = MessageSink {
        verbose: ctx.verbose,
        stdout_reserved: stdout,
    };

    let result = match ctx.api.merge(&config, options) {
        Ok(result) => result,
        Err(FragzError::Interrupted { notices, source }) => {
            print_messages(&notices, sink);
            return Err(*source);
        }
        Err(e) => return Err(e),
    };
    if stdout {
        if let Some(document) = &result.document {
            print_document(document)?;
        }
    }
    print_messages(&result.messages, sink);
    Ok(())
}

fn handle_check(ctx: &AppContext, fragments: Vec<String>) -> Result<()> {
    let config = ctx.config.clone().with_fragments(fragments);
    let result = ctx.api.check(&config)?;
    print_statuses(&result.statuses);
    print_messages(&result.messages, sink(ctx));
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.config(ConfigAction::Show(ctx.config.clone()))?;
    if let Some(config) = &result.config {
        print_config(config, result.config_path.as_deref());
    }
    print_messages(&result.messages, sink(ctx));
    Ok(())
}

fn handle_init(ctx: &AppContext, force: bool) -> Result<()> {
    let result = ctx.api.config(ConfigAction::Init { force })?;
    print_messages(&result.messages, sink(ctx));
    Ok(())
}

fn sink(ctx: &AppContext) -> MessageSink {
    MessageSink {
        verbose: ctx.verbose,
        stdout_reserved: false,
    }
}
