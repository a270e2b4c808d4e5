//! Command classification for the simulated backend
//!
//! Classification is literal prefix/substring matching over the command
//! string. The rules live in an ordered list so a real backend can
//! replace or extend them wholesale; order matters because later rules
//! see only commands earlier rules rejected.

/// One classification rule: a predicate and the responder used when it
/// matches
pub struct ClassifierRule {
    matches: fn(&str) -> bool,
    respond: fn(&str) -> String,
}

impl ClassifierRule {
    /// Build a rule from a predicate and responder
    pub fn new(matches: fn(&str) -> bool, respond: fn(&str) -> String) -> Self {
        Self { matches, respond }
    }
}

/// Ordered predicate→responder classifier
pub struct CommandClassifier {
    rules: Vec<ClassifierRule>,
}

impl CommandClassifier {
    /// The standard rule set for scaffolding command plans
    pub fn standard() -> Self {
        let rules = vec![
            ClassifierRule::new(
                |cmd| cmd.starts_with("mkdir"),
                |cmd| format!("Created directory {}", last_token(cmd)),
            ),
            ClassifierRule::new(
                |cmd| cmd.starts_with("cd"),
                |cmd| format!("Changed directory to {}", last_token(cmd)),
            ),
            ClassifierRule::new(|cmd| cmd.contains("npm init"), |_| "Initialized package.json".to_string()),
            ClassifierRule::new(
                |cmd| cmd.contains("npm install"),
                |cmd| {
                    let packages = cmd.replace("npm install", "");
                    let packages = packages.trim();
                    if packages.is_empty() {
                        "Installed packages: none".to_string()
                    } else {
                        format!("Installed packages: {packages}")
                    }
                },
            ),
            ClassifierRule::new(
                |cmd| cmd.contains("create-react-app"),
                |_| "Created React application with create-react-app".to_string(),
            ),
            ClassifierRule::new(
                |cmd| cmd.contains("create-next-app"),
                |_| "Created Next.js application with create-next-app".to_string(),
            ),
            ClassifierRule::new(|cmd| cmd.contains("vue create"), |_| "Created Vue application".to_string()),
            ClassifierRule::new(
                |cmd| cmd.contains("tailwindcss init"),
                |_| "Initialized Tailwind CSS configuration".to_string(),
            ),
            ClassifierRule::new(
                |cmd| cmd.contains("tsc --init"),
                |_| "Initialized TypeScript configuration".to_string(),
            ),
        ];

        Self { rules }
    }

    /// Build a classifier from a custom rule list
    pub fn with_rules(rules: Vec<ClassifierRule>) -> Self {
        Self { rules }
    }

    /// Synthesize output for a command
    ///
    /// Unmatched commands get the generic `Executed:` form rather than
    /// an error - the simulated backend treats every command as runnable.
    pub fn classify(&self, command: &str) -> String {
        for rule in &self.rules {
            if (rule.matches)(command) {
                return (rule.respond)(command);
            }
        }
        format!("Executed: {command}")
    }
}

/// Last whitespace-separated token of a command (its path argument for
/// the directory commands)
fn last_token(command: &str) -> &str {
    command.split_whitespace().last().unwrap_or_default()
}
