//! Code demultiplexing
//!
//! Splits one generated code blob (a self-contained HTML document) into
//! named single-purpose files. The full input always lands in
//! `index.html`; the first embedded style and script regions, if any,
//! are additionally extracted into `styles.css` and `script.js`.
//!
//! Extraction is first-match-only: multiple style/script blocks are not
//! merged. The enhanced generation prompt requests exactly one of each,
//! so this limitation is invisible in the intended flow.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::domain::FileTree;

fn style_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("static pattern compiles"))
}

fn script_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)<script[^>]*>(.*?)</script>").expect("static pattern compiles"))
}

/// Split a generated code blob into named files
///
/// Stateless and idempotent: the same input always yields byte-identical
/// output.
pub fn parse_code_into_files(code: &str) -> FileTree {
    let mut files = FileTree::new();
    // The unmodified input is the default/fallback HTML file.
    files.insert("index.html", code);

    if let Some(captures) = style_pattern().captures(code) {
        let css = captures.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if !css.is_empty() {
            debug!(len = css.len(), "parse_code_into_files: extracted styles.css");
            files.insert("styles.css", css);
        }
    }

    if let Some(captures) = script_pattern().captures(code) {
        let js = captures.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if !js.is_empty() {
            debug!(len = js.len(), "parse_code_into_files: extracted script.js");
            files.insert("script.js", js);
        }
    }

    files
}
