//! Stagehand - Project Configuration Gate
//!
//! Main entry point for the Stagehand CLI.

use clap::{Parser, Subcommand};
use stagehand::config::ProjectConfig;
use stagehand::style;
use std::path::{Path, PathBuf};
use std::process;

/// Stagehand - Configuration gate and dev-loop tooling for multi-account deployments
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the project configuration file (default: config/project-config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the project configuration and print a summary
    Check,

    /// List deployment stages and their accounts
    Accounts,

    /// Write a starter project configuration
    Init,

    /// Clear the runner cache and launch the development entry point
    Develop,
}

fn main() {
    // Initialize logging
    if let Err(e) = stagehand::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", style::fatal(&e.to_string()));
        process::exit(1);
    }
}

fn run(cli: Cli) -> stagehand::Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(ProjectConfig::default_path);

    match cli.command {
        Commands::Init => handle_init(&config_path),

        Commands::Develop => {
            let code = stagehand::develop::run(Path::new("."))?;
            // Propagate the child's exit code unchanged
            process::exit(code);
        }

        Commands::Check => {
            let config = ProjectConfig::load(&config_path)?;
            println!("{}", style::success("✓ Project configuration is valid"));
            println!();
            print_summary(&config);
            Ok(())
        }

        Commands::Accounts => {
            let config = ProjectConfig::load(&config_path)?;
            print_accounts(&config);
            Ok(())
        }
    }
}

fn handle_init(config_path: &Path) -> stagehand::Result<()> {
    if config_path.exists() {
        println!(
            "Configuration already exists at {}",
            style::path(&config_path.display().to_string())
        );
        println!();
        println!("Edit it directly, then verify with:");
        println!("  stagehand check");
        return Ok(());
    }

    let config = ProjectConfig::starter();
    config.save(config_path)?;

    println!(
        "{} Created configuration at {}",
        style::success("✓"),
        style::path(&config_path.display().to_string())
    );
    println!();
    println!("Next steps:");
    println!("  1. Set projectId and the prod account number/region");
    println!("  2. Add further stages (dev, staging) under accounts");
    println!("  3. Verify the result:");
    println!("     stagehand check");

    Ok(())
}

fn print_summary(config: &ProjectConfig) {
    println!("{}", style::header("Project"));
    println!();
    println!("  Project id:        {}", config.project_id);

    match config.pipeline() {
        Some(pipeline) => {
            println!(
                "  Pipeline:          {}/{}",
                pipeline.group, pipeline.project
            );
        }
        None => {
            println!("  Pipeline:          {}", style::dim("disabled"));
        }
    }

    println!(
        "  Artifact repo:     {}",
        if config.use_artifact_repository { "yes" } else { "no" }
    );
    println!(
        "  Corporate auth:    {}",
        if config.use_corporate_auth { "yes" } else { "no" }
    );
    println!(
        "  Stages:            {} ({})",
        config.accounts.len(),
        config.stage_names().join(", ")
    );
}

fn print_accounts(config: &ProjectConfig) {
    println!("Deployment accounts for {}:", config.project_id);
    println!();

    for stage in config.stage_names() {
        // stage_names only returns keys present in accounts
        let Some(account) = config.account(stage) else {
            continue;
        };

        // Pad before styling so ANSI codes don't skew the column width
        let padded = format!("{:<12}", stage);
        print!(
            "  {} {}  {}",
            style::stage_style(&padded),
            account.account_number,
            account.region
        );

        if let Some(ref secret) = account.auth_secret_id {
            print!("  {}", style::dim(&format!("auth: {}", secret)));
        }

        println!();
    }
}
