//! CLI Adapter.

use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::adapters::{DialoguerPrompter, PackageManagerCommand};
use crate::app::api::{self, CreateOutcome, CreateRequest, InstallStatus, VcsStatus};
use crate::app::{config, logging};
use crate::domain::identity::validate_scope;
use crate::domain::{AppError, LanguageVariant, PackageManager, TargetEnvironment};
use crate::ports::Prompter;

#[derive(Parser, Debug)]
#[command(name = "create-npm-package")]
#[command(version)]
#[command(
    about = "Scaffold an npm package with generated webpack, lint and manifest config",
    long_about = None
)]
struct Cli {
    /// Package name (prompted when omitted)
    name: Option<String>,
    /// GitHub user or organization owning the repository
    #[arg(short, long)]
    scope: Option<String>,
    /// Language variant: legacy (es5), modern (es6) or typed (typescript)
    #[arg(short, long)]
    language: Option<String>,
    /// Target the browser (adds an HTML entry page and dev server)
    #[arg(long, conflicts_with_all = ["library", "target"])]
    browser: bool,
    /// Target other packages as a library
    #[arg(long, conflicts_with_all = ["browser", "target"])]
    library: bool,
    /// Deployment target: browser or library
    #[arg(short, long)]
    target: Option<String>,
    /// Output directory, relative to the current directory (defaults to NAME)
    #[arg(short, long)]
    directory: Option<PathBuf>,
    /// Do not install dev dependencies
    #[arg(long)]
    skip_install: bool,
    /// Do not initialize a git repository
    #[arg(long)]
    skip_git: bool,
    /// Configuration file (defaults to ~/.create-npm-package.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run_create(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_create(cli: Cli) -> Result<(), AppError> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let config = config::load_config(cli.config.as_deref(), home.as_deref())?;

    let Some(request) = resolve_answers(&cli, &DialoguerPrompter::new())? else {
        return Ok(());
    };

    let base_dir = env::current_dir()?;
    let outcome = api::create_at(&base_dir, &request, &config)?;
    print_outcome(&outcome, config.package_manager);
    Ok(())
}

/// Fill in answers not given as flags by asking the prompter.
///
/// Returns `None` when the user aborts a prompt.
fn resolve_answers<P: Prompter>(cli: &Cli, prompter: &P) -> Result<Option<CreateRequest>, AppError> {
    let name = match &cli.name {
        Some(value) => value.clone(),
        None => match prompter.package_name()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let scope = match &cli.scope {
        Some(value) => {
            validate_scope(value)?;
            value.clone()
        }
        None => match prompter.scope()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let variant = match &cli.language {
        Some(value) => value.parse::<LanguageVariant>()?,
        None => match prompter.language_variant()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let target = if cli.browser {
        TargetEnvironment::Browser
    } else if cli.library {
        TargetEnvironment::Library
    } else if let Some(value) = &cli.target {
        value.parse::<TargetEnvironment>()?
    } else {
        match prompter.will_use_in_browser()? {
            Some(value) => TargetEnvironment::from_browser_flag(value),
            None => return Ok(None),
        }
    };

    Ok(Some(CreateRequest {
        name,
        scope,
        variant,
        target,
        directory: cli.directory.clone(),
        skip_install: cli.skip_install,
        skip_git: cli.skip_git,
    }))
}

fn print_outcome(outcome: &CreateOutcome, manager: PackageManager) {
    println!(
        "✅ Created {} ({}) at {}",
        outcome.package_name,
        outcome.selection,
        outcome.project_dir.display()
    );
    if !outcome.removed_logs.is_empty() {
        println!("  Removed {} stale log file(s)", outcome.removed_logs.len());
    }

    match &outcome.install {
        InstallStatus::Installed => {
            println!(
                "✅ Installed {} dev dependencies with {}",
                outcome.installed_packages.len(),
                manager
            );
        }
        InstallStatus::Failed(reason) => {
            let packages: Vec<&str> = outcome.installed_packages.iter().map(String::as_str).collect();
            println!("⚠️  Dependency install failed: {}", reason);
            println!("  Retry inside the project with:");
            println!(
                "  {} {}",
                manager.program(),
                PackageManagerCommand::new(manager).args(&packages).join(" ")
            );
        }
        InstallStatus::Skipped => {}
    }

    if outcome.vcs == VcsStatus::Initialized {
        println!("✅ Initialized a git repository");
    }
}
