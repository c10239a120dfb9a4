use clap::Parser;
use directories::ProjectDirs;
use scrollrack::api::{ConfigAction, ScrollRackApi, ScrollRackPaths};
use scrollrack::config::{ScrollRackConfig, KEYS};
use scrollrack::error::{Result, ScrollError};
use scrollrack::search::ScryfallPortal;
use scrollrack::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod logging;
mod print;
use args::{Cli, Commands};
use print::{print_collection, print_config, print_listing, print_messages};

const HOME_ENV: &str = "SCROLLRACK_HOME";
const LIBRARY_DIR: &str = "Library";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ScrollRackApi<FileStore, ScryfallPortal>,
    config: ScrollRackConfig,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::New { name }) => handle_new(&mut ctx, &name),
        Some(Commands::Show {
            name,
            sort,
            desc,
            filter,
        }) => handle_show(&ctx, &name, sort.as_deref(), desc, filter.as_deref()),
        Some(Commands::Sort { name, by, desc }) => handle_sort(&mut ctx, &name, &by, desc),
        Some(Commands::Search {
            query,
            max,
            save_as,
        }) => handle_search(&mut ctx, &query, max, save_as.as_deref()),
        Some(Commands::Add { target, source }) => handle_add(&mut ctx, &target, &source),
        Some(Commands::Copy {
            source,
            target,
            filter,
        }) => handle_copy(&mut ctx, &source, &target, &filter),
        Some(Commands::Move {
            source,
            target,
            filter,
        }) => handle_move(&mut ctx, &source, &target, &filter),
        Some(Commands::Drop { name, filter }) => handle_drop(&mut ctx, &name, &filter),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn resolve_paths() -> Result<ScrollRackPaths> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        let home = PathBuf::from(home);
        return Ok(ScrollRackPaths {
            library: home.join(LIBRARY_DIR),
            config_dir: home,
        });
    }

    let dirs = ProjectDirs::from("com", "scrollrack", "scrollrack").ok_or_else(|| {
        ScrollError::Api(format!(
            "Could not determine a home directory; set {}",
            HOME_ENV
        ))
    })?;
    Ok(ScrollRackPaths {
        config_dir: dirs.config_dir().to_path_buf(),
        library: dirs.data_dir().join(LIBRARY_DIR),
    })
}

fn init_context() -> Result<AppContext> {
    let paths = resolve_paths()?;
    let config = ScrollRackConfig::load(&paths.config_dir)?;
    let store = FileStore::new(paths.library_dir(&config));
    let portal = ScryfallPortal::new()?.with_delay(config.request_delay());
    let api = ScrollRackApi::new(store, portal, paths);
    Ok(AppContext { api, config })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_collections()?;
    print_listing(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.create_collection(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(
    ctx: &AppContext,
    name: &str,
    sort: Option<&str>,
    desc: bool,
    filter: Option<&str>,
) -> Result<()> {
    let result = ctx
        .api
        .show_collection(name, sort.map(|column| (column, !desc)), filter)?;
    if let Some(collection) = &result.collection {
        print_collection(collection);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_sort(ctx: &mut AppContext, name: &str, by: &str, desc: bool) -> Result<()> {
    let result = ctx.api.sort_collection(name, by, !desc)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    ctx: &mut AppContext,
    query: &str,
    max: Option<usize>,
    save_as: Option<&str>,
) -> Result<()> {
    let max_cards = max.unwrap_or(ctx.config.max_cards);
    let result = ctx.api.search(query, max_cards, save_as)?;
    if let Some(collection) = &result.collection {
        print_collection(collection);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, target: &str, source: &str) -> Result<()> {
    let result = ctx.api.add_cards(target, source)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, source: &str, target: &str, filter: &str) -> Result<()> {
    let result = ctx.api.copy_cards(source, target, filter)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, source: &str, target: &str, filter: &str) -> Result<()> {
    let result = ctx.api.move_cards(source, target, filter)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_drop(ctx: &mut AppContext, name: &str, filter: &str) -> Result<()> {
    let result = ctx.api.drop_cards(name, filter)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), _) if !KEYS.contains(&key.as_str()) => {
            return Err(ScrollError::Api(format!(
                "Unknown config key: {} (expected one of {})",
                key,
                KEYS.join(", ")
            )));
        }
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
