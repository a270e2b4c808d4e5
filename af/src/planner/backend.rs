//! Backend scaffolding branches

use crate::domain::{BackendConfig, BackendFramework, Database, Language};

/// Append the backend section of a command plan
pub(super) fn plan(commands: &mut Vec<String>, back: &BackendConfig, language: Language, backend_dir: &str) {
    commands.push(format!("mkdir -p {backend_dir}"));
    commands.push(format!("cd {backend_dir}"));
    commands.push("npm init -y".to_string());

    match back.framework {
        BackendFramework::Express => {
            commands.push("npm install express cors dotenv".to_string());
            if language.is_typescript() {
                commands.push(
                    "npm install -D typescript @types/express @types/node @types/cors ts-node-dev".to_string(),
                );
                commands.push(
                    "npx tsc --init --target es6 --module commonjs --outDir ./dist --strict true \
                     --esModuleInterop true --skipLibCheck true --forceConsistentCasingInFileNames true"
                        .to_string(),
                );
            } else {
                commands.push("npm install -D nodemon".to_string());
            }

            // Source subdirectories are language-independent.
            commands.push("mkdir -p src/routes".to_string());
            commands.push("mkdir -p src/controllers".to_string());
            commands.push("mkdir -p src/models".to_string());
        }
        // The nest CLI only scaffolds typescript projects.
        BackendFramework::Nest if language.is_typescript() => {
            commands.push("npm i -g @nestjs/cli".to_string());
            commands.push(format!("nest new {backend_dir} --package-manager npm"));
        }
        BackendFramework::Nest | BackendFramework::Fastify | BackendFramework::Koa | BackendFramework::Hapi => {}
    }

    match back.database {
        Database::Mongodb => {
            commands.push("npm install mongoose".to_string());
            if language.is_typescript() {
                commands.push("npm install -D @types/mongoose".to_string());
            }
        }
        Database::Postgres => {
            commands.push("npm install pg".to_string());
            if language.is_typescript() {
                commands.push("npm install -D @types/pg".to_string());
            }
        }
        // The supabase client ships its own types.
        Database::Supabase => {
            commands.push("npm install @supabase/supabase-js".to_string());
        }
        Database::Mysql | Database::Sqlite | Database::None => {}
    }
}
