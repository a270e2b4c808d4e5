//! Backend file generation branches

use serde_json::json;

use crate::domain::{BackendConfig, BackendFramework, FileTree, Language, ProjectConfig};
use crate::templates::express;

/// Populate the tree with the backend section's starter files
pub(super) fn generate(tree: &mut FileTree, back: &BackendConfig, config: &ProjectConfig) {
    let backend_dir = config.backend_dir();
    let language = config.language;
    let ext = language.source_ext();

    match back.framework {
        BackendFramework::Express => {
            tree.insert(format!("{backend_dir}/src/index.{ext}"), express::server_source(language));
            tree.insert(
                format!("{backend_dir}/src/routes/index.{ext}"),
                express::routes_source(language),
            );
            tree.insert(
                format!("{backend_dir}/src/controllers/index.{ext}"),
                express::controllers_source(language),
            );
            tree.insert(format!("{backend_dir}/.env"), express::ENV_FILE);
            tree.insert(format!("{backend_dir}/.gitignore"), express::GITIGNORE);

            if language.is_typescript() {
                tree.insert(format!("{backend_dir}/tsconfig.json"), tsconfig_json());
            }

            tree.insert(
                format!("{backend_dir}/package.json"),
                package_json(&backend_dir, config.description.as_deref(), language),
            );
        }
        // No starter files wired up for these frameworks yet.
        BackendFramework::Nest | BackendFramework::Fastify | BackendFramework::Koa | BackendFramework::Hapi => {}
    }
}

/// Compiler options for generated typescript backends
///
/// Mirrors the planner's `tsc --init` flags so the written file and the
/// init command agree.
fn tsconfig_json() -> String {
    let tsconfig = json!({
        "compilerOptions": {
            "target": "es6",
            "module": "commonjs",
            "outDir": "./dist",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules"]
    });
    serde_json::to_string_pretty(&tsconfig).expect("static tsconfig serializes")
}

/// Generated `package.json` for express backends
///
/// The `main` and script fields are the language-dependent part of the
/// manifest contract: typescript builds with `tsc` and runs the compiled
/// output, javascript runs sources directly and has no build step.
fn package_json(backend_dir: &str, description: Option<&str>, language: Language) -> String {
    let manifest = json!({
        "name": backend_dir,
        "version": "1.0.0",
        "description": description.unwrap_or("Generated Express server"),
        "main": match language {
            Language::Typescript => "dist/index.js",
            Language::Javascript => "src/index.js",
        },
        "scripts": {
            "start": match language {
                Language::Typescript => "node dist/index.js",
                Language::Javascript => "node src/index.js",
            },
            "dev": match language {
                Language::Typescript => "ts-node-dev --respawn src/index.ts",
                Language::Javascript => "nodemon src/index.js",
            },
            "build": match language {
                Language::Typescript => "tsc",
                Language::Javascript => "echo 'No build step required'",
            },
        },
        "keywords": [],
        "author": "",
        "license": "ISC"
    });
    serde_json::to_string_pretty(&manifest).expect("static manifest serializes")
}
