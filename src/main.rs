use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vtes::analyzer::VersionAnalyzer;
use vtes::cli::Orchestrator;
use vtes::config::{load_settings, Settings};
use vtes::git::Git2Repository;
use vtes::gitignore;
use vtes::store::{ConfigStore, ProjectLayout};
use vtes::ui;

#[derive(clap::Parser)]
#[command(
    name = "vtes",
    about = "Bump the project version from git history and commit it",
    disable_version_flag = true
)]
struct Args {
    #[arg(short = 'V', long = "Version", help = "Print vtes version information")]
    tool_version: bool,

    #[arg(short = 'v', long = "version", help = "Print the project's version")]
    project_version: bool,

    #[arg(
        short,
        long,
        visible_alias = "watch",
        help = "Watch commit.json and run on every change"
    )]
    write: bool,

    #[arg(long, help = "Choose a .gitignore template (also accepted as -ignore)")]
    gitignore: bool,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<PathBuf>,
}

/// clap has no multi-letter short flags, so `-ignore` is spelled out first.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-ignore" {
                OsString::from("--gitignore")
            } else {
                arg
            }
        })
        .collect()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse_from(normalize_args(std::env::args_os()));
    init_tracing();

    if args.tool_version {
        ui::display_tool_version(env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let project_root = std::env::current_dir().context("Cannot determine project directory")?;

    let settings = match load_settings(args.config.as_deref(), &project_root) {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&format!("Error loading settings: {}", e));
            std::process::exit(1);
        }
    };
    let store = ConfigStore::new(ProjectLayout::new(&project_root, &settings));

    if args.project_version {
        let version = store.project_version()?;
        ui::display_project_version(version.as_deref());
        return Ok(());
    }

    if args.gitignore && !args.write {
        choose_gitignore(&settings, store.layout())?;
        return Ok(());
    }

    let repo = Git2Repository::new(&project_root);
    let analyzer = VersionAnalyzer::new(settings.markers.clone());
    let mut orchestrator = Orchestrator::new(store, repo, analyzer);

    if !args.write {
        match orchestrator.run_cycle() {
            Ok(outcome) => {
                ui::display_outcome(&outcome);
                return Ok(());
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    if args.gitignore {
        if let Err(e) = orchestrator.bootstrap() {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
        let layout = orchestrator.store().layout();
        if !layout.gitignore().exists() {
            choose_gitignore(&settings, layout)?;
        }
    }

    ui::display_status("Watching commit.json for changes...");
    if let Err(e) = orchestrator.watch(settings.poll_interval()) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}

fn choose_gitignore(settings: &Settings, layout: &ProjectLayout) -> Result<()> {
    let Some(template) = ui::select_template(gitignore::TEMPLATES)? else {
        ui::display_status("Invalid choice. Not fetching a .gitignore template.");
        return Ok(());
    };

    ui::display_status(&format!("Fetching .gitignore template: {}", template));
    gitignore::fetch_template(&settings.template_index, template, &layout.gitignore())?;
    ui::display_success(&format!("Saved .gitignore template: {}", template));
    Ok(())
}
