//! Frontend scaffolding branches

use crate::domain::{FrontendConfig, FrontendFramework, Language, Styling};
use crate::templates::tailwind::{TAILWIND_CONFIG_JS, TAILWIND_GLOBAL_CSS};

/// Append the frontend section of a command plan
pub(super) fn plan(commands: &mut Vec<String>, front: &FrontendConfig, language: Language, name: &str) {
    match front.framework {
        FrontendFramework::React => {
            if language.is_typescript() {
                commands.push(format!("npx create-react-app {name} --template typescript"));
            } else {
                commands.push(format!("npx create-react-app {name}"));
            }

            if front.styling == Styling::Tailwind {
                // Init must precede the overwrites: `tailwindcss init -p`
                // creates the config the echoes then replace.
                commands.push(format!("cd {name}"));
                commands.push("npm install -D tailwindcss postcss autoprefixer".to_string());
                commands.push("npx tailwindcss init -p".to_string());
                commands.push(format!("echo \"{TAILWIND_CONFIG_JS}\" > tailwind.config.js"));
                commands.push(format!("echo \"{TAILWIND_GLOBAL_CSS}\" > ./src/index.css"));
            }
        }
        FrontendFramework::Nextjs => {
            if language.is_typescript() {
                commands.push(format!(
                    "npx create-next-app@latest {name} --typescript --tailwind --eslint --app --src-dir"
                ));
            } else {
                commands.push(format!(
                    "npx create-next-app@latest {name} --tailwind --eslint --app --src-dir"
                ));
            }

            // Feature checks are independent; both may fire.
            if front.has_feature("auth") {
                commands.push(format!("cd {name}"));
                commands.push("npm install next-auth".to_string());
            }
            if front.has_feature("api") {
                commands.push(format!("cd {name}"));
                commands.push("mkdir -p src/app/api".to_string());
            }
        }
        FrontendFramework::Vue => {
            commands.push("npm install -g @vue/cli".to_string());
            if language.is_typescript() {
                commands.push(format!("vue create {name} -d -p typescript"));
            } else {
                commands.push(format!("vue create {name} -d"));
            }
        }
        FrontendFramework::Svelte => {
            commands.push(format!("npx degit sveltejs/template {name}"));
            commands.push(format!("cd {name}"));
            commands.push("npm install".to_string());
            if language.is_typescript() {
                commands.push("node scripts/setupTypeScript.js".to_string());
            }
        }
        // No scaffolding tool wired up for these yet; the section
        // contributes nothing.
        FrontendFramework::Angular | FrontendFramework::Vanilla => {}
    }
}
