//! Execution engine - sequential plan replay
//!
//! Replays a command list or file tree against a session, one entry at a
//! time, halting at the first failure. The engine itself is
//! execution-agnostic: the [`ExecutionBackend`] trait is the seam where
//! a real subprocess/filesystem backend replaces the built-in simulated
//! one without touching the sequencing contract.

mod classifier;
mod simulated;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ExecutionConfig;
use crate::domain::{FileTree, ProjectSession};

pub use classifier::{ClassifierRule, CommandClassifier};
pub use simulated::SimulatedBackend;

/// Outcome of replaying one plan entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Human-readable output for the entry
    pub output: String,

    /// Whether the entry succeeded
    pub success: bool,

    /// Failure detail, present iff `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionResult {
    /// Create a successful result
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Where plan entries actually land
///
/// The built-in [`SimulatedBackend`] synthesizes outputs; a production
/// backend would spawn processes and write files, surfacing genuine
/// failures through the same [`ExecutionResult`] contract.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Execute one shell command in the session's working directory
    async fn run_command(&self, command: &str, session: &ProjectSession) -> ExecutionResult;

    /// Write one file into the session's workspace
    async fn write_file(&self, session: &ProjectSession, path: &str, content: &str) -> ExecutionResult;
}

/// Replays plans against sessions with stop-on-first-failure semantics
pub struct ExecutionEngine {
    backend: Box<dyn ExecutionBackend>,
}

impl ExecutionEngine {
    /// Create an engine over any backend
    pub fn new(backend: Box<dyn ExecutionBackend>) -> Self {
        Self { backend }
    }

    /// Create an engine over the built-in simulated backend
    pub fn simulated(config: &ExecutionConfig) -> Self {
        Self::new(Box::new(SimulatedBackend::from_config(config)))
    }

    /// Execute a single command
    pub async fn execute_command(&self, command: &str, session: &ProjectSession) -> ExecutionResult {
        debug!(session = %session.id, %command, "execute_command: dispatching");
        self.backend.run_command(command, session).await
    }

    /// Execute commands in order, halting after the first failure
    ///
    /// The returned log is truncated at the failing entry: a failed step
    /// invalidates the working-directory assumptions of everything after
    /// it, so later commands are never attempted.
    pub async fn execute_commands(&self, commands: &[String], session: &ProjectSession) -> Vec<ExecutionResult> {
        let mut results = Vec::with_capacity(commands.len());

        for command in commands {
            let result = self.execute_command(command, session).await;
            let failed = !result.success;
            results.push(result);

            if failed {
                warn!(session = %session.id, %command, "execute_commands: halting on failure");
                break;
            }
        }

        results
    }

    /// Write a single file
    pub async fn create_file(&self, session: &ProjectSession, path: &str, content: &str) -> ExecutionResult {
        debug!(session = %session.id, %path, "create_file: dispatching");
        self.backend.write_file(session, path, content).await
    }

    /// Write a file tree in insertion order, halting after the first failure
    pub async fn create_files(&self, session: &ProjectSession, files: &FileTree) -> Vec<ExecutionResult> {
        let mut results = Vec::with_capacity(files.len());

        for file in files.iter() {
            let result = self.create_file(session, &file.path, &file.content).await;
            let failed = !result.success;
            results.push(result);

            if failed {
                warn!(session = %session.id, path = %file.path, "create_files: halting on failure");
                break;
            }
        }

        results
    }
}
