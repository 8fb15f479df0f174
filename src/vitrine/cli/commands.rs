//! # Command Dispatch
//!
//! `run()` parses the arguments, installs logging, builds an [`AppContext`]
//! (paths, scope, config, API over the catalog file) and hands off to one
//! `handle_*` function per subcommand. Handlers call the API, then render
//! the `CmdResult` they get back. Nothing here decides what a page contains.

use super::logging;
use super::render::{print_messages, render_config, render_page, render_tags};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;
use vitrine::api::{CmdResult, ConfigAction, FilterSettings, VitrineApi, VitrinePaths};
use vitrine::config::VitrineConfig;
use vitrine::error::{Result, VitrineError};
use vitrine::model::{Scope, ALL_FILTER};
use vitrine::store::fs::FileCatalog;

/// Overrides the global scope directory.
pub const HOME_ENV: &str = "VITRINE_HOME";
const PROJECT_DIR: &str = ".vitrine";
const PROMPT: &str = "> ";

struct AppContext {
    api: VitrineApi<FileCatalog>,
    scope: Scope,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { filter, all }) => handle_list(&ctx, &filter, all),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Browse) => handle_browse(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, ALL_FILTER, false),
    }
}

fn global_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "vitrine", "vitrine")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            VitrineError::Config("Could not determine the global config directory".to_string())
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let paths = VitrinePaths {
        project: Some(cwd.join(PROJECT_DIR)),
        global: global_dir()?,
    };
    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config = VitrineConfig::load(paths.scope_dir(scope)?)?;
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| cwd.join(&config.catalog));
    debug!(
        catalog = %catalog_path.display(),
        global = %paths.global.display(),
        ?scope,
        "resolved context"
    );

    let api = VitrineApi::new(
        FileCatalog::new(catalog_path),
        paths,
        FilterSettings::from(&config),
    );
    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();

    Ok(AppContext {
        api,
        scope,
        use_color,
    })
}

fn print_page(result: &CmdResult, use_color: bool) {
    print!("{}", render_page(result, use_color));
    print_messages(&result.messages, use_color);
}

fn handle_list(ctx: &AppContext, filter: &str, show_all: bool) -> Result<()> {
    let result = ctx.api.list(filter, show_all)?;
    print_page(&result, ctx.use_color);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.tags()?;
    print!("{}", render_tags(&result.tags, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let mut session = ctx.api.browse()?;
    session.reveal_all();
    print_page(&session.snapshot(), ctx.use_color);

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("{}", PROMPT);
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let Some(result) = session.apply_line(&line?) else {
            break;
        };
        session.reveal_all();
        println!();
        print_page(&result, ctx.use_color);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(ctx.scope, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}
