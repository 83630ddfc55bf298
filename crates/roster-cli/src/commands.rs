use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use roster_core::{Browser, generate_random, generate_seeded};
use roster_model::{Field, Record};
use tracing::{info, info_span};

use roster_cli::render::{render_json, render_page};
use roster_cli::session::Session;
use roster_cli::settings::Settings;

use crate::cli::{ConfigArgs, DataArgs, ListArgs, OutputFormatArg};

pub fn run_browse(data: &DataArgs, settings: &Settings, use_color: bool) -> Result<()> {
    let browser = build_browser(data, settings);
    let mut session = Session::new(
        browser,
        use_color,
        settings.display.page_size_options.clone(),
    );
    if io::stdin().is_terminal() {
        println!("type `help` for commands, `quit` to leave");
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("interactive session failed")
}

pub fn run_list(args: &ListArgs, settings: &Settings, use_color: bool) -> Result<()> {
    let span = info_span!("list");
    let _guard = span.enter();
    let mut browser = build_browser(&args.data, settings);
    if let Some(text) = &args.search {
        browser.search(text.as_str());
    }
    if let Some(column) = args.sort {
        let key = Field::from(column);
        browser.toggle_sort(key);
        if args.descending {
            browser.toggle_sort(key);
        }
    }
    browser.go_to_page(args.page.get() - 1);

    let editing = browser.edit_session().editing_id();
    let view = browser.view().clone();
    match args.format {
        OutputFormatArg::Table => {
            println!(
                "{}",
                render_page(&view, browser.query(), editing, use_color)
            );
        }
        OutputFormatArg::Json => {
            println!("{}", render_json(&view).context("serialize page")?);
        }
    }
    Ok(())
}

pub fn run_config(args: &ConfigArgs, settings: &Settings, path: &Path) -> Result<()> {
    if args.write {
        settings.save_to(path)?;
        info!(path = %path.display(), "settings written");
        println!("wrote {}", path.display());
    } else {
        println!("# {}", path.display());
    }
    print!("{}", settings.to_toml()?);
    Ok(())
}

/// Merge flags over settings and build the starting browser.
pub fn build_browser(data: &DataArgs, settings: &Settings) -> Browser {
    let page_size = data
        .page_size
        .unwrap_or_else(|| settings.display.page_size());
    Browser::new(load_records(data, settings), page_size)
}

fn load_records(data: &DataArgs, settings: &Settings) -> Vec<Record> {
    let count = data.records.unwrap_or(settings.data.records);
    match data.seed.or(settings.data.seed) {
        Some(seed) => {
            info!(count, seed, "generating seeded dataset");
            generate_seeded(count, seed)
        }
        None => {
            info!(count, "generating random dataset");
            generate_random(count)
        }
    }
}
