//! Simulated execution backend
//!
//! Stands in for a real subprocess/filesystem backend: classifies each
//! command into a synthetic output and sleeps for a bounded artificial
//! delay in place of real latency. Every entry succeeds here - genuine
//! failures are the business of whatever backend replaces this one.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::config::ExecutionConfig;
use crate::domain::ProjectSession;

use super::classifier::CommandClassifier;
use super::{ExecutionBackend, ExecutionResult};

/// Backend that synthesizes results instead of touching the system
pub struct SimulatedBackend {
    classifier: CommandClassifier,
    command_delay: Duration,
    file_delay: Duration,
}

impl SimulatedBackend {
    /// Create a backend with explicit delays
    pub fn new(command_delay: Duration, file_delay: Duration) -> Self {
        Self {
            classifier: CommandClassifier::standard(),
            command_delay,
            file_delay,
        }
    }

    /// Create a backend from execution configuration
    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(
            Duration::from_millis(config.command_delay_ms),
            Duration::from_millis(config.file_delay_ms),
        )
    }

    /// Replace the classifier (custom rule sets)
    pub fn with_classifier(mut self, classifier: CommandClassifier) -> Self {
        self.classifier = classifier;
        self
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::from_config(&ExecutionConfig::default())
    }
}

#[async_trait]
impl ExecutionBackend for SimulatedBackend {
    async fn run_command(&self, command: &str, session: &ProjectSession) -> ExecutionResult {
        debug!(session = %session.id, %command, "simulated: run_command");
        tokio::time::sleep(self.command_delay).await;
        ExecutionResult::success(self.classifier.classify(command))
    }

    async fn write_file(&self, session: &ProjectSession, path: &str, _content: &str) -> ExecutionResult {
        debug!(session = %session.id, %path, "simulated: write_file");
        tokio::time::sleep(self.file_delay).await;
        ExecutionResult::success(format!("Created file: {path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FrontendConfig, FrontendFramework, Language, ProjectConfig, ProjectKind, Styling};

    fn session() -> ProjectSession {
        ProjectSession::new(
            ProjectConfig {
                name: "app".to_string(),
                description: None,
                language: Language::Javascript,
                kind: ProjectKind::Frontend(FrontendConfig {
                    framework: FrontendFramework::React,
                    styling: Styling::Css,
                    features: vec![],
                }),
            },
            "/tmp/appforge/sessions",
        )
    }

    fn instant() -> SimulatedBackend {
        SimulatedBackend::new(Duration::ZERO, Duration::ZERO)
    }

    #[tokio::test]
    async fn test_commands_always_succeed() {
        let backend = instant();
        let s = session();

        let result = backend.run_command("definitely-not-a-real-tool --flag", &s).await;
        assert!(result.success);
        assert_eq!(result.output, "Executed: definitely-not-a-real-tool --flag");
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_classified_output() {
        let backend = instant();
        let s = session();

        let result = backend.run_command("npm install express", &s).await;
        assert_eq!(result.output, "Installed packages: express");
    }

    #[tokio::test]
    async fn test_file_writes_report_path() {
        let backend = instant();
        let s = session();

        let result = backend.write_file(&s, "app/src/App.jsx", "content").await;
        assert!(result.success);
        assert_eq!(result.output, "Created file: app/src/App.jsx");
    }
}
