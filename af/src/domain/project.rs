//! Project configuration domain types
//!
//! `ProjectConfig` is the typed description of a desired project. The
//! project kind is a closed sum type, so a frontend-only config cannot
//! carry a backend section and a fullstack config always carries both -
//! shape violations are caught once at the wire boundary, before any
//! planning happens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Typescript,
}

impl Language {
    /// Whether this is the typescript variant
    pub fn is_typescript(self) -> bool {
        matches!(self, Self::Typescript)
    }

    /// Component file extension (`tsx` / `jsx`)
    pub fn component_ext(self) -> &'static str {
        match self {
            Self::Typescript => "tsx",
            Self::Javascript => "jsx",
        }
    }

    /// Plain source file extension (`ts` / `js`)
    pub fn source_ext(self) -> &'static str {
        match self {
            Self::Typescript => "ts",
            Self::Javascript => "js",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Javascript => write!(f, "javascript"),
            Self::Typescript => write!(f, "typescript"),
        }
    }
}

/// Frontend scaffolding framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontendFramework {
    React,
    Nextjs,
    Vue,
    Angular,
    Svelte,
    Vanilla,
}

impl std::fmt::Display for FrontendFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::React => write!(f, "react"),
            Self::Nextjs => write!(f, "nextjs"),
            Self::Vue => write!(f, "vue"),
            Self::Angular => write!(f, "angular"),
            Self::Svelte => write!(f, "svelte"),
            Self::Vanilla => write!(f, "vanilla"),
        }
    }
}

/// Styling toolchain choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Styling {
    #[default]
    Css,
    Scss,
    Tailwind,
    Bootstrap,
}

impl std::fmt::Display for Styling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css => write!(f, "css"),
            Self::Scss => write!(f, "scss"),
            Self::Tailwind => write!(f, "tailwind"),
            Self::Bootstrap => write!(f, "bootstrap"),
        }
    }
}

/// Backend HTTP framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendFramework {
    Express,
    Nest,
    Fastify,
    Koa,
    Hapi,
}

impl std::fmt::Display for BackendFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Express => write!(f, "express"),
            Self::Nest => write!(f, "nest"),
            Self::Fastify => write!(f, "fastify"),
            Self::Koa => write!(f, "koa"),
            Self::Hapi => write!(f, "hapi"),
        }
    }
}

/// Database selection for backend projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Mongodb,
    Postgres,
    Mysql,
    Sqlite,
    Supabase,
    #[default]
    None,
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mongodb => write!(f, "mongodb"),
            Self::Postgres => write!(f, "postgres"),
            Self::Mysql => write!(f, "mysql"),
            Self::Sqlite => write!(f, "sqlite"),
            Self::Supabase => write!(f, "supabase"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Frontend section of a project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Scaffolding framework
    pub framework: FrontendFramework,

    /// Styling toolchain
    #[serde(default)]
    pub styling: Styling,

    /// Optional feature flags (e.g. "auth", "api")
    #[serde(default)]
    pub features: Vec<String>,
}

impl FrontendConfig {
    /// Whether a feature flag is present
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Backend section of a project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// HTTP framework
    pub framework: BackendFramework,

    /// Database selection
    #[serde(default)]
    pub database: Database,
}

/// What the project is: frontend-only, backend-only, or both
///
/// Closed over kind, so each variant carries exactly the sections that
/// kind requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectKind {
    Frontend(FrontendConfig),
    Backend(BackendConfig),
    Fullstack {
        frontend: FrontendConfig,
        backend: BackendConfig,
    },
}

impl ProjectKind {
    /// Wire tag for this kind ("frontend" / "backend" / "fullstack")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Frontend(_) => "frontend",
            Self::Backend(_) => "backend",
            Self::Fullstack { .. } => "fullstack",
        }
    }

    /// Frontend section, if this kind has one
    pub fn frontend(&self) -> Option<&FrontendConfig> {
        match self {
            Self::Frontend(frontend) | Self::Fullstack { frontend, .. } => Some(frontend),
            Self::Backend(_) => None,
        }
    }

    /// Backend section, if this kind has one
    pub fn backend(&self) -> Option<&BackendConfig> {
        match self {
            Self::Backend(backend) | Self::Fullstack { backend, .. } => Some(backend),
            Self::Frontend(_) => None,
        }
    }

    /// Whether this is a fullstack project
    pub fn is_fullstack(&self) -> bool {
        matches!(self, Self::Fullstack { .. })
    }
}

/// Typed, immutable description of a desired project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectConfig", into = "RawProjectConfig")]
pub struct ProjectConfig {
    /// Identifier used to derive file paths and CLI invocations
    pub name: String,

    /// Free text, echoed into generated metadata files only
    pub description: Option<String>,

    /// Source language for everything the project generates
    pub language: Language,

    /// Kind plus the sections that kind requires
    pub kind: ProjectKind,
}

impl ProjectConfig {
    /// Directory the backend lands in: `<name>-backend` for fullstack
    /// projects (so it cannot collide with the frontend app directory),
    /// plain `<name>` otherwise.
    pub fn backend_dir(&self) -> String {
        if self.kind.is_fullstack() {
            format!("{}-backend", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Configuration shape errors, raised at the wire boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Project name must not be empty")]
    EmptyName,

    #[error("Project kind '{0}' requires a frontend section")]
    MissingFrontend(String),

    #[error("Project kind '{0}' requires a backend section")]
    MissingBackend(String),
}

/// Wire shape of a project configuration
///
/// Matches the flat form configs arrive in: a `kind` tag plus optional
/// `frontend`/`backend` sections. Conversion into [`ProjectConfig`]
/// enforces the kind/section invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawProjectConfig {
    kind: KindTag,
    language: Language,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frontend: Option<FrontendConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backend: Option<BackendConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindTag {
    Frontend,
    Backend,
    Fullstack,
}

impl TryFrom<RawProjectConfig> for ProjectConfig {
    type Error = ConfigError;

    fn try_from(raw: RawProjectConfig) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let kind = match raw.kind {
            KindTag::Frontend => ProjectKind::Frontend(
                raw.frontend
                    .ok_or_else(|| ConfigError::MissingFrontend("frontend".to_string()))?,
            ),
            KindTag::Backend => ProjectKind::Backend(
                raw.backend
                    .ok_or_else(|| ConfigError::MissingBackend("backend".to_string()))?,
            ),
            KindTag::Fullstack => ProjectKind::Fullstack {
                frontend: raw
                    .frontend
                    .ok_or_else(|| ConfigError::MissingFrontend("fullstack".to_string()))?,
                backend: raw
                    .backend
                    .ok_or_else(|| ConfigError::MissingBackend("fullstack".to_string()))?,
            },
        };

        Ok(Self {
            name: raw.name,
            description: raw.description,
            language: raw.language,
            kind,
        })
    }
}

impl From<ProjectConfig> for RawProjectConfig {
    fn from(config: ProjectConfig) -> Self {
        let kind = match &config.kind {
            ProjectKind::Frontend(_) => KindTag::Frontend,
            ProjectKind::Backend(_) => KindTag::Backend,
            ProjectKind::Fullstack { .. } => KindTag::Fullstack,
        };
        let (frontend, backend) = match config.kind {
            ProjectKind::Frontend(frontend) => (Some(frontend), None),
            ProjectKind::Backend(backend) => (None, Some(backend)),
            ProjectKind::Fullstack { frontend, backend } => (Some(frontend), Some(backend)),
        };

        Self {
            kind,
            language: config.language,
            name: config.name,
            description: config.description,
            frontend,
            backend,
        }
    }
}
