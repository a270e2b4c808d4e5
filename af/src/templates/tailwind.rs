//! Tailwind toolchain payloads
//!
//! Shared by the planner (the overwrite commands carry them as echo
//! arguments) and the generator (the same files appear in the tree), so
//! the two plans can never drift apart.

/// Content of the generated `tailwind.config.js`
pub const TAILWIND_CONFIG_JS: &str = "/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [\"./src/**/*.{js,jsx,ts,tsx}\"],
  theme: {
    extend: {},
  },
  plugins: [],
}";

/// Content of the generated global stylesheet
pub const TAILWIND_GLOBAL_CSS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;";
