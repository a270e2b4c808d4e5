//! AppForge CLI entry point

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use appforge::cli::{Cli, Command, OutputFormat};
use appforge::config::Config;
use appforge::domain::{FileTree, ProjectConfig, ProjectSession};
use appforge::engine::{ExecutionEngine, ExecutionResult};
use appforge::session::SessionManager;
use appforge::{generate_file_structure, generate_init_commands, parse_code_into_files};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("appforge")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to a log file, not stdout/stderr - the CLI owns the terminal
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("appforge.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Plan { project } => cmd_plan(&config, &project),
        Command::Files { project, contents } => cmd_files(&config, &project, contents),
        Command::Build { project, format } => cmd_build(&config, &project, format).await,
        Command::Generate { prompt, split } => cmd_generate(&config, &prompt, split).await,
    }
}

/// Load a project configuration from a YAML file
///
/// Shape errors (a kind missing its section) surface here, before any
/// planning happens.
fn load_project(path: &PathBuf) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path).context(format!("Failed to read project config {}", path.display()))?;
    let project: ProjectConfig =
        serde_yaml::from_str(&content).context(format!("Invalid project config {}", path.display()))?;
    Ok(project)
}

fn mint_session(config: &Config, project: ProjectConfig) -> (SessionManager, ProjectSession) {
    let manager = SessionManager::new(config.workspace.base_path.clone());
    let session = manager.create_session(project);
    (manager, session)
}

/// Print the command plan for a project config
fn cmd_plan(config: &Config, project_path: &PathBuf) -> Result<()> {
    let project = load_project(project_path)?;
    let (_manager, session) = mint_session(config, project);

    println!("{} {}", "session".bold(), session.id);
    println!("{} {}", "workdir".bold(), session.working_path);
    println!();

    for (index, command) in generate_init_commands(&session).iter().enumerate() {
        println!("{:>3}  {}", index + 1, command);
    }

    Ok(())
}

/// Print the generated file tree for a project config
fn cmd_files(config: &Config, project_path: &PathBuf, contents: bool) -> Result<()> {
    let project = load_project(project_path)?;
    let (_manager, session) = mint_session(config, project);

    let tree = generate_file_structure(&session);
    if tree.is_empty() {
        println!("(no files generated for this configuration)");
        return Ok(());
    }

    for file in tree.iter() {
        if contents {
            println!("{}", format!("--- {} ---", file.path).bold());
            println!("{}", file.content);
        } else {
            println!("{}", file.path);
        }
    }

    Ok(())
}

/// Plan, generate and replay a project through the simulated engine
async fn cmd_build(config: &Config, project_path: &PathBuf, format: OutputFormat) -> Result<()> {
    let project = load_project(project_path)?;
    let (_manager, session) = mint_session(config, project);

    let commands = generate_init_commands(&session);
    let tree = generate_file_structure(&session);
    let engine = ExecutionEngine::simulated(&config.execution);

    let command_log = engine.execute_commands(&commands, &session).await;
    let command_failed = command_log.last().is_some_and(|r| !r.success);

    // A failed command plan invalidates the workspace; file replay only
    // runs on a clean command log.
    let file_log = if command_failed {
        Vec::new()
    } else {
        engine.create_files(&session, &tree).await
    };

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "session": session.id,
                "working_path": session.working_path,
                "commands": command_log,
                "files": file_log,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{} {}", "session".bold(), session.id);
            print_log("commands", &commands, &command_log);
            if !file_log.is_empty() {
                let paths: Vec<String> = tree.paths().map(String::from).collect();
                print_log("files", &paths, &file_log);
            }
        }
    }

    if command_failed || file_log.last().is_some_and(|r| !r.success) {
        eyre::bail!("build halted on first failure; partial log above");
    }

    Ok(())
}

/// Print one replay log section
fn print_log(title: &str, planned: &[String], log: &[ExecutionResult]) {
    println!();
    println!("{}", title.bold());
    for (entry, result) in planned.iter().zip(log.iter()) {
        if result.success {
            println!("  {} {}", "ok".green(), result.output);
        } else {
            let detail = result.error.as_deref().unwrap_or("unknown error");
            println!("  {} {} ({})", "failed".red(), entry, detail);
        }
    }
    if log.len() < planned.len() {
        println!("  {} {} entries not attempted", "-".dimmed(), planned.len() - log.len());
    }
}

/// Generate a web app from a prompt and optionally split it into files
async fn cmd_generate(config: &Config, prompt: &str, split: bool) -> Result<()> {
    config.validate()?;
    let llm = appforge::llm::create_client(&config.llm)?;

    let reply = appforge::generate_web_app(&llm, prompt).await;

    if let Some(error) = &reply.error {
        eyre::bail!("generation failed: {error}");
    }

    if !split {
        println!("{}", reply.text);
        return Ok(());
    }

    let Some(code) = &reply.code else {
        println!("(the reply contained no code blocks)");
        return Ok(());
    };

    let files: FileTree = parse_code_into_files(code);
    for file in files.iter() {
        println!("{}", format!("--- {} ---", file.path).bold());
        println!("{}", file.content);
    }

    Ok(())
}
