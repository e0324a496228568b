use blogz::api::{self, BlogzApi, CmdMessage, ConfigAction, MessageLevel};
use blogz::config::BlogzConfig;
use blogz::error::{BlogzError, Result};
use blogz::model::Article;
use blogz::store::fs_backend::FileBackend;
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "BLOGZ_HOME";
const LOG_ENV: &str = "BLOGZ_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "blogz=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let root = resolve_root(cli.dir)?;
    let config = BlogzConfig::load(&root)?;
    let backend = config.file_backend(root.clone());

    match cli.command.unwrap_or(Commands::List { json: false }) {
        Commands::Init => handle_init(&backend),
        Commands::Config { key, value } => handle_config(&root, key, value),
        Commands::List { json } => handle_list(&BlogzApi::open(backend)?, json),
        Commands::Create { header, body } => {
            handle_create(&BlogzApi::open(backend)?, header, body)
        }
        Commands::View { id } => handle_view(&BlogzApi::open(backend)?, &id),
        Commands::Update { id, header, body } => {
            handle_update(&BlogzApi::open(backend)?, &id, header, body)
        }
        Commands::Delete { id } => handle_delete(&BlogzApi::open(backend)?, &id),
        Commands::Search { keyword, json } => {
            handle_search(&BlogzApi::open(backend)?, &keyword, json)
        }
    }
}

fn resolve_root(dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir);
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "blogz", "blogz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BlogzError::Store("Could not determine data directory".to_string()))
}

fn handle_init(backend: &FileBackend) -> Result<()> {
    let result = api::init_store(backend)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(root: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let shown_key = match &action {
        ConfigAction::ShowKey(key) => Some(key.clone()),
        _ => None,
    };

    let result = api::configure(root, action)?;
    if let Some(config) = &result.config {
        match shown_key.as_deref() {
            Some("data-file") => println!("{}", config.data_file),
            Some("indent") => println!("{}", config.indent),
            _ if result.messages.is_empty() => {
                println!("data-file = {}", config.data_file);
                println!("indent = {}", config.indent);
            }
            _ => {}
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &BlogzApi<FileBackend>, json: bool) -> Result<()> {
    let result = api.list_articles()?;
    if json {
        return print_json(&result.listed_articles);
    }
    print_articles(&result.listed_articles);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(api: &BlogzApi<FileBackend>, header: String, body: String) -> Result<()> {
    let result = api.create_article(header, body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &BlogzApi<FileBackend>, id: &str) -> Result<()> {
    let result = api.view_article(id)?;
    for article in &result.listed_articles {
        print_full_article(article);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    api: &BlogzApi<FileBackend>,
    id: &str,
    header: String,
    body: String,
) -> Result<()> {
    let result = api.update_article(id, header, body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &BlogzApi<FileBackend>, id: &str) -> Result<()> {
    let result = api.delete_article(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &BlogzApi<FileBackend>, keyword: &str, json: bool) -> Result<()> {
    let result = api.search_articles(keyword)?;
    if json {
        return print_json(&result.listed_articles);
    }
    if !result.listed_articles.is_empty() {
        print_articles(&result.listed_articles);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

fn print_json(articles: &[Article]) -> Result<()> {
    let json = serde_json::to_string_pretty(articles)?;
    println!("{}", json);
    Ok(())
}

fn print_full_article(article: &Article) {
    println!(
        "{} {}",
        article.id.to_string().yellow(),
        article.header.bold()
    );
    println!("{}", article.date.to_rfc3339().dimmed());
    println!("--------------------------------");
    println!("{}", article.body);
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("No articles found.");
        return;
    }

    let id_width = articles
        .iter()
        .map(|a| a.id.to_string().len())
        .max()
        .unwrap_or(0);

    for article in articles {
        let id_str = format!("{:>width$}. ", article.id.get(), width = id_width);
        let time_ago = format_time_ago(article.date);

        let body_preview: String = article
            .body
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let header_body = if body_preview.is_empty() {
            article.header.clone()
        } else {
            format!("{} {}", article.header, body_preview)
        };

        let fixed_width = 2 + id_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let display = fit_to_width(&header_body, available);
        let padding = available.saturating_sub(display.width());

        println!(
            "  {}{}{}  {}",
            id_str.yellow(),
            display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

/// Clip `text` to `width` display columns, marking a cut with an ellipsis.
fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut clipped: String = text
        .chars()
        .take_while(|c| {
            used += UnicodeWidthChar::width(*c).unwrap_or(0);
            used <= budget
        })
        .collect();
    clipped.push('…');
    clipped
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
