//! Integration tests for AppForge
//!
//! These tests verify the end-to-end contracts of the pipeline:
//! session uniqueness, plan determinism, stop-on-failure replay, and
//! the parsing/demultiplexing boundaries.

use std::collections::HashSet;

use async_trait::async_trait;
use proptest::prelude::*;

use appforge::config::ExecutionConfig;
use appforge::domain::{
    BackendConfig, BackendFramework, Database, FileTree, FrontendConfig, FrontendFramework, Language, ProjectConfig,
    ProjectKind, ProjectSession, Styling,
};
use appforge::engine::{ExecutionBackend, ExecutionEngine, ExecutionResult};
use appforge::llm::{ProviderReply, extract_code};
use appforge::session::SessionManager;
use appforge::{generate_file_structure, generate_init_commands, parse_code_into_files};

fn backend_config(language: Language, database: Database) -> ProjectConfig {
    ProjectConfig {
        name: "api1".to_string(),
        description: None,
        language,
        kind: ProjectKind::Backend(BackendConfig {
            framework: BackendFramework::Express,
            database,
        }),
    }
}

fn fullstack_config() -> ProjectConfig {
    ProjectConfig {
        name: "shop".to_string(),
        description: Some("demo shop".to_string()),
        language: Language::Typescript,
        kind: ProjectKind::Fullstack {
            frontend: FrontendConfig {
                framework: FrontendFramework::React,
                styling: Styling::Tailwind,
                features: vec![],
            },
            backend: BackendConfig {
                framework: BackendFramework::Express,
                database: Database::Postgres,
            },
        },
    }
}

// =============================================================================
// Session Uniqueness
// =============================================================================

#[test]
fn test_session_ids_and_paths_pairwise_distinct() {
    let manager = SessionManager::new("/tmp/appforge/sessions");

    let sessions: Vec<ProjectSession> = (0..50)
        .map(|_| manager.create_session(backend_config(Language::Typescript, Database::Postgres)))
        .collect();

    let ids: HashSet<&str> = sessions.iter().map(|s| s.id.as_str()).collect();
    let paths: HashSet<&str> = sessions.iter().map(|s| s.working_path.as_str()).collect();

    assert_eq!(ids.len(), sessions.len(), "all ids must be pairwise distinct");
    assert_eq!(paths.len(), sessions.len(), "all working paths must be pairwise distinct");

    // Every minted session is retrievable and listed
    for session in &sessions {
        assert_eq!(manager.get_session(&session.id).as_ref(), Some(session));
    }
    assert_eq!(manager.list_sessions().len(), sessions.len());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_planning_and_generation_deterministic_for_fixed_session() {
    let manager = SessionManager::new("/tmp/appforge/sessions");
    let session = manager.create_session(fullstack_config());

    let first_plan = generate_init_commands(&session);
    let second_plan = generate_init_commands(&session);
    assert_eq!(first_plan, second_plan);

    let first_tree = generate_file_structure(&session);
    let second_tree = generate_file_structure(&session);
    assert_eq!(first_tree, second_tree);
}

// =============================================================================
// Stop-on-first-failure Replay
// =============================================================================

/// Backend that fails on one designated command and succeeds elsewhere
struct FailOnCommand(&'static str);

#[async_trait]
impl ExecutionBackend for FailOnCommand {
    async fn run_command(&self, command: &str, _session: &ProjectSession) -> ExecutionResult {
        if command == self.0 {
            ExecutionResult::failure(format!("forced failure: {command}"))
        } else {
            ExecutionResult::success(format!("Executed: {command}"))
        }
    }

    async fn write_file(&self, _session: &ProjectSession, path: &str, _content: &str) -> ExecutionResult {
        ExecutionResult::success(format!("Created file: {path}"))
    }
}

#[tokio::test]
async fn test_stop_on_failure_truncates_log() {
    let manager = SessionManager::new("/tmp/appforge/sessions");
    let session = manager.create_session(backend_config(Language::Javascript, Database::None));
    let engine = ExecutionEngine::new(Box::new(FailOnCommand("B")));

    let commands = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let results = engine.execute_commands(&commands, &session).await;

    assert_eq!(results.len(), 2, "C must never be attempted");
    assert!(results[0].success);
    assert!(!results[1].success);
    assert!(results[1].error.is_some());
    assert!(!results.iter().any(|r| r.output.contains('C')));
}

#[tokio::test]
async fn test_simulated_replay_of_full_plan_succeeds() {
    let manager = SessionManager::new("/tmp/appforge/sessions");
    let session = manager.create_session(fullstack_config());
    let engine = ExecutionEngine::simulated(&ExecutionConfig {
        command_delay_ms: 0,
        file_delay_ms: 0,
    });

    let commands = generate_init_commands(&session);
    let command_log = engine.execute_commands(&commands, &session).await;
    assert_eq!(command_log.len(), commands.len());
    assert!(command_log.iter().all(|r| r.success));

    let tree = generate_file_structure(&session);
    let file_log = engine.create_files(&session, &tree).await;
    assert_eq!(file_log.len(), tree.len());
    assert!(file_log.iter().all(|r| r.success));

    // File results come back in the tree's insertion order
    for (file, result) in tree.iter().zip(file_log.iter()) {
        assert!(result.output.contains(&file.path));
    }
}

// =============================================================================
// Demultiplexer
// =============================================================================

#[test]
fn test_demux_default_is_index_only() {
    let files = parse_code_into_files("<p>hi</p>");

    let paths: Vec<&str> = files.paths().collect();
    assert_eq!(paths, vec!["index.html"]);
    assert_eq!(files.get("index.html"), Some("<p>hi</p>"));
}

proptest! {
    // Idempotence holds for arbitrary input, not just well-formed HTML.
    #[test]
    fn test_demux_idempotent_on_arbitrary_input(code in ".*") {
        let first = parse_code_into_files(&code);
        let second = parse_code_into_files(&code);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.get("index.html"), Some(code.as_str()));
    }
}

#[test]
fn test_demux_extracts_style_and_script() {
    let code = "<style>body{color:red}</style><script>alert(1)</script>";
    let files = parse_code_into_files(code);

    assert_eq!(files.len(), 3);
    assert_eq!(files.get("index.html"), Some(code));
    assert_eq!(files.get("styles.css"), Some("body{color:red}"));
    assert_eq!(files.get("script.js"), Some("alert(1)"));
}

// =============================================================================
// Code Extraction
// =============================================================================

#[test]
fn test_fenced_code_extraction_strips_markers() {
    let code = extract_code("Here:\n```html\n<div></div>\n```\n").unwrap();
    assert_eq!(code, "<div></div>");
    assert!(!code.contains("```"));
    assert!(!code.contains("html"));
}

#[test]
fn test_provider_failure_reply_shape() {
    let reply = ProviderReply::from_error("quota exceeded");
    assert_eq!(reply.text, "");
    assert!(reply.code.is_none());
    assert_eq!(reply.error.as_deref(), Some("quota exceeded"));
}

// =============================================================================
// Package Manifest Contract
// =============================================================================

#[test]
fn test_manifest_build_script_varies_by_language() {
    let manager = SessionManager::new("/tmp/appforge/sessions");

    let ts_session = manager.create_session(backend_config(Language::Typescript, Database::None));
    let js_session = manager.create_session(backend_config(Language::Javascript, Database::None));

    let ts_tree: FileTree = generate_file_structure(&ts_session);
    let js_tree: FileTree = generate_file_structure(&js_session);

    let ts_manifest: serde_json::Value = serde_json::from_str(ts_tree.get("api1/package.json").unwrap()).unwrap();
    let js_manifest: serde_json::Value = serde_json::from_str(js_tree.get("api1/package.json").unwrap()).unwrap();

    assert_eq!(ts_manifest["scripts"]["build"], "tsc");
    assert_eq!(js_manifest["scripts"]["build"], "echo 'No build step required'");
}

// =============================================================================
// End-to-end Scenario
// =============================================================================

#[test]
fn test_typescript_express_postgres_plan_ordering() {
    let manager = SessionManager::new("/tmp/appforge/sessions");
    let session = manager.create_session(backend_config(Language::Typescript, Database::Postgres));

    let commands = generate_init_commands(&session);

    let expected_relative_order = [
        format!("mkdir -p {}", session.working_path),
        format!("cd {}", session.working_path),
        "mkdir -p api1".to_string(),
        "cd api1".to_string(),
        "npm init -y".to_string(),
        "npm install express cors dotenv".to_string(),
        "npm install -D typescript @types/express @types/node @types/cors ts-node-dev".to_string(),
        "npx tsc --init --target es6 --module commonjs --outDir ./dist --strict true --esModuleInterop true --skipLibCheck true --forceConsistentCasingInFileNames true".to_string(),
        "mkdir -p src/routes".to_string(),
        "mkdir -p src/controllers".to_string(),
        "mkdir -p src/models".to_string(),
        "npm install pg".to_string(),
        "npm install -D @types/pg".to_string(),
    ];

    let mut last_position = 0;
    for expected in &expected_relative_order {
        let position = commands
            .iter()
            .position(|c| c == expected)
            .unwrap_or_else(|| panic!("plan missing: {expected}"));
        assert!(position >= last_position, "out of order: {expected}");
        last_position = position;
    }
}

#[tokio::test]
async fn test_sibling_plans_are_isolated() {
    let manager = SessionManager::new("/tmp/appforge/sessions");
    let healthy = manager.create_session(backend_config(Language::Typescript, Database::None));
    let doomed = manager.create_session(backend_config(Language::Typescript, Database::None));

    let failing_engine = ExecutionEngine::new(Box::new(FailOnCommand("npm init -y")));
    let clean_engine = ExecutionEngine::simulated(&ExecutionConfig {
        command_delay_ms: 0,
        file_delay_ms: 0,
    });

    let doomed_log = failing_engine
        .execute_commands(&generate_init_commands(&doomed), &doomed)
        .await;
    assert!(doomed_log.last().is_some_and(|r| !r.success));

    // The sibling session's plan replays untouched
    let healthy_log = clean_engine
        .execute_commands(&generate_init_commands(&healthy), &healthy)
        .await;
    assert!(healthy_log.iter().all(|r| r.success));
}
