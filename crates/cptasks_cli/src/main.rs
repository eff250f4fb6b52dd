//! `cptasks` terminal front end.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open the slot database.
//! - Drive `AppShell` the way the header, entry panel and card checkboxes do.

use anyhow::{anyhow, bail, Context};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use cptasks_core::config::APP_DIR_NAME;
use cptasks_core::db::open_db;
use cptasks_core::{
    default_log_level, init_logging, AppConfig, AppShell, Platform, SlotRepository,
    SqliteSlotRepository, SubmitError, TaskId, APP_TITLE, EMPTY_LIST_MESSAGE,
};
use log::info;
use std::path::PathBuf;

/// Track competitive-programming problems.
#[derive(Parser, Debug)]
#[command(name = "cptasks", version, about)]
struct Cli {
    /// Directory holding the task database and logs.
    #[arg(long, global = true, env = "CPTASKS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "CPTASKS_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all tasks in insertion order.
    List,
    /// Add a task through the entry form.
    Add(AddArgs),
    /// Flip a task between todo and done.
    Toggle {
        /// Task id as printed by `list`.
        id: TaskId,
    },
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long, default_value = "")]
    title: String,

    /// atcoder|codeforces|leetcode|other
    #[arg(long, default_value = "atcoder", value_parser = parse_platform)]
    platform: Platform,

    #[arg(long)]
    difficulty: Option<u32>,

    /// Due date as YYYY-MM-DD.
    #[arg(long)]
    due: Option<NaiveDate>,

    /// Problem URL; only used with `--platform other`.
    #[arg(long, default_value = "")]
    url: String,

    /// Repeat to add several tags.
    #[arg(long = "tag")]
    tags: Vec<String>,
}

fn parse_platform(value: &str) -> Result<Platform, String> {
    Platform::parse(value)
        .ok_or_else(|| format!("unknown platform `{value}`; expected atcoder|codeforces|leetcode|other"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_logging(config.log_level, &config.log_dir()).map_err(|err| anyhow!("{err}"))?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        cptasks_core::core_version()
    );

    let conn = open_db(config.db_path())
        .with_context(|| format!("failed to open {}", config.db_path().display()))?;
    let mut shell = AppShell::start(SqliteSlotRepository::new(&conn));

    match cli.command.unwrap_or(Command::List) {
        Command::List => print_list(&shell),
        Command::Add(args) => add_task(&mut shell, args)?,
        Command::Toggle { id } => {
            if shell.toggle(id)? {
                if let Some(card) = shell.render(Utc::now()).into_iter().find(|c| c.id == id) {
                    println!("{card}");
                }
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => dirs::data_dir()
            .context("no platform data directory; pass --data-dir")?
            .join(APP_DIR_NAME),
    };
    let data_dir = if data_dir.is_absolute() {
        data_dir
    } else {
        std::env::current_dir()?.join(data_dir)
    };

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    AppConfig::new(data_dir)
        .with_log_level(level)
        .map_err(|err| anyhow!("{err}"))
}

fn print_list<R: SlotRepository>(shell: &AppShell<R>) {
    println!("{APP_TITLE}");
    let cards = shell.render(Utc::now());
    if cards.is_empty() {
        println!("{EMPTY_LIST_MESSAGE}");
        return;
    }
    for card in cards {
        println!("{}  {card}", card.id);
    }
}

fn add_task<R: SlotRepository>(shell: &mut AppShell<R>, args: AddArgs) -> anyhow::Result<()> {
    let form = shell.open_entry_panel();
    form.set_title(args.title);
    form.set_platform(args.platform);
    form.set_difficulty(args.difficulty);
    form.set_due(args.due);
    form.set_url(args.url);
    for tag in &args.tags {
        form.set_tag_input(tag.as_str());
        form.commit_tag_input();
    }

    match shell.submit_entry() {
        Ok(id) => {
            println!("{id}");
            Ok(())
        }
        Err(SubmitError::Invalid(err)) => bail!("{err}"),
        Err(err) => Err(err.into()),
    }
}
