//! Embedded prompt templates
//!
//! These are compiled into the binary. The web-app prompt asks for one
//! self-contained HTML document with embedded styling and script, which
//! is why the demultiplexer only looks for a single style and a single
//! script region.

/// Template for full web-app generation; `{requirements}` is replaced
/// with the user's prompt
const WEB_APP_TEMPLATE: &str = r#"Create a complete web application based on the following requirements.
Return the code in properly formatted code blocks with HTML, CSS, and JavaScript.
Make sure the application is fully functional and responsive.

User requirements: {requirements}

Provide the complete code for a single-page application with the following structure:
1. HTML structure
2. CSS styles (preferably using Tailwind classes)
3. JavaScript functionality

Make sure all components work together and the application is ready to use.

IMPORTANT: Return the complete code in a single HTML file with embedded CSS and JavaScript."#;

/// Build the enhanced web-app prompt for a user's requirements
pub fn web_app_prompt(requirements: &str) -> String {
    WEB_APP_TEMPLATE.replace("{requirements}", requirements)
}
