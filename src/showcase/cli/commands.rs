use super::browse;
use super::render::{
    render_chips, render_filter_state, render_json, render_messages, render_project_detail,
    render_projects,
};
use super::setup::{Cli, Commands, OutputMode};
use clap::Parser;
use showcase::api::{self, CmdResult, ConfigAction, ShowcaseApi};
use showcase::config::{resolve_config_dir, ShowcaseConfig};
use showcase::error::{Result, ShowcaseError};
use showcase::store::fixture::FixtureSource;
use showcase::store::fs::FileSource;
use showcase::store::CatalogSource;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

struct AppContext {
    api: ShowcaseApi<Box<dyn CatalogSource>>,
    output: OutputMode,
    line_width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = resolve_config_dir(&cwd);

    match cli.command {
        // Handled before the catalog loads, so a broken catalog path can be fixed.
        Some(Commands::Config { key, value }) => handle_config(&config_dir, cli.output, key, value),
        command => {
            let mut ctx = init_context(cli.catalog, cli.output, config_dir)?;
            match command {
                Some(Commands::List { search, tags }) => handle_list(&ctx, search, tags),
                Some(Commands::Tags { tags }) => handle_tags(&ctx, tags),
                Some(Commands::Show { id }) => handle_show(&ctx, id),
                Some(Commands::Browse) => handle_browse(&mut ctx),
                Some(Commands::Config { .. }) | None => handle_list(&ctx, None, Vec::new()),
            }
        }
    }
}

fn init_context(
    catalog: Option<PathBuf>,
    output: OutputMode,
    config_dir: PathBuf,
) -> Result<AppContext> {
    let config = ShowcaseConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %config_dir.display(), "ignoring unreadable config");
        ShowcaseConfig::default()
    });

    let source: Box<dyn CatalogSource> = match catalog.or_else(|| config.catalog.clone()) {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(FixtureSource),
    };
    tracing::debug!(source = %source.describe(), "selected catalog source");

    let api = ShowcaseApi::new(source)?;
    Ok(AppContext {
        api,
        output,
        line_width: config.line_width,
    })
}

fn handle_list(ctx: &AppContext, search: Option<String>, tags: Vec<String>) -> Result<()> {
    let result = ctx.api.list_projects(search.as_deref(), &tags)?;
    emit(ctx.output, &result, |r| {
        let mut out = String::new();
        if let Some(filter) = &r.filter {
            out.push_str(&render_filter_state(filter));
        }
        out.push_str(&render_projects(&r.projects, ctx.line_width));
        out.push_str(&render_messages(&r.messages));
        out
    })
}

fn handle_tags(ctx: &AppContext, tags: Vec<String>) -> Result<()> {
    let result = ctx.api.list_tags(&tags)?;
    emit(ctx.output, &result, |r| {
        format!("{}{}", render_chips(&r.chips), render_messages(&r.messages))
    })
}

fn handle_show(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.show_project(id)?;
    emit(ctx.output, &result, |r| {
        r.projects.iter().map(render_project_detail).collect()
    })
}

fn handle_browse(ctx: &mut AppContext) -> Result<()> {
    if ctx.output == OutputMode::Json {
        return Err(ShowcaseError::Api(
            "browse is interactive and has no JSON output".into(),
        ));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!(
            "Browsing {}. Type `help` for commands, `quit` to leave.",
            ctx.api.source().describe()
        );
    }
    let mut stdout = io::stdout();
    browse::run_loop(&mut ctx.api, stdin.lock(), &mut stdout, ctx.line_width)
}

fn handle_config(
    config_dir: &std::path::Path,
    output: OutputMode,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = api::config(config_dir, action)?;
    emit(output, &result, |r| {
        let mut out = String::new();
        if show_all {
            if let Some(config) = &r.config {
                for key in showcase::config::CONFIG_KEYS {
                    let value = config.get(key).unwrap_or_default();
                    out.push_str(&format!("{} = {}\n", key, value));
                }
            }
        }
        out.push_str(&render_messages(&r.messages));
        out
    })
}

fn emit<F>(output: OutputMode, result: &CmdResult, text: F) -> Result<()>
where
    F: FnOnce(&CmdResult) -> String,
{
    match output {
        OutputMode::Json => println!("{}", render_json(result)?),
        OutputMode::Text => print!("{}", text(result)),
    }
    Ok(())
}
