//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AppForge - project scaffolding pipeline
#[derive(Parser)]
#[command(
    name = "appforge",
    about = "Compile project configs into command plans and file trees, and replay them",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Print the command plan for a project config
    Plan {
        /// Path to the project config YAML
        project: PathBuf,
    },

    /// Print the generated file tree for a project config
    Files {
        /// Path to the project config YAML
        project: PathBuf,

        /// Also print file contents, not just paths
        #[arg(long)]
        contents: bool,
    },

    /// Plan, generate and replay a project through the simulated engine
    Build {
        /// Path to the project config YAML
        project: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate a web app from a prompt and split it into files
    Generate {
        /// Natural-language requirements for the app
        prompt: String,

        /// Print extracted files instead of the raw reply
        #[arg(long)]
        split: bool,
    },
}

/// Output format for build results
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
