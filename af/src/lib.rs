//! AppForge - the generated-artifact pipeline behind an AI app builder
//!
//! AppForge turns a typed project configuration, or a natural-language
//! prompt answered by an AI provider, into concrete artifacts: an
//! ordered list of shell commands and a named file tree. Plans are
//! replayed against isolated per-user sessions with strict sequential,
//! stop-on-first-failure semantics.
//!
//! # Core Concepts
//!
//! - **Sessions**: isolated, uniquely addressable workspaces binding a
//!   config to a working path
//! - **Plans as data**: planning and execution are decoupled; commands
//!   are opaque strings, files are a path→content map
//! - **Simulated execution**: the built-in backend synthesizes results;
//!   a real backend plugs in at the [`engine::ExecutionBackend`] seam
//! - **Replay**: plans run one entry at a time, halting at the first
//!   failure
//!
//! # Modules
//!
//! - [`domain`] - project config, sessions, generated files
//! - [`planner`] - config → ordered command plan
//! - [`generator`] - config → file tree
//! - [`engine`] - sequential replay with pluggable backend
//! - [`llm`] - provider client, reply parsing, code extraction
//! - [`demux`] - split one code blob into named files
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod demux;
pub mod domain;
pub mod engine;
pub mod generator;
pub mod llm;
pub mod planner;
pub mod prompts;
pub mod session;
pub mod templates;

// Re-export commonly used types
pub use config::{Config, ExecutionConfig, LlmConfig, WorkspaceConfig};
pub use demux::parse_code_into_files;
pub use domain::{
    BackendConfig, BackendFramework, ConfigError, Database, FileTree, FrontendConfig, FrontendFramework,
    GeneratedFile, Language, ProjectConfig, ProjectKind, ProjectSession, Styling,
};
pub use engine::{CommandClassifier, ExecutionBackend, ExecutionEngine, ExecutionResult, SimulatedBackend};
pub use generator::generate_file_structure;
pub use llm::{GeminiClient, LlmClient, LlmError, ProviderReply, extract_code, generate_web_app};
pub use planner::generate_init_commands;
pub use session::SessionManager;
