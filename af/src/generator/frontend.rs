//! Frontend file generation branches

use crate::domain::{FileTree, FrontendConfig, FrontendFramework, Language, Styling};
use crate::templates::tailwind::{TAILWIND_CONFIG_JS, TAILWIND_GLOBAL_CSS};
use crate::templates::{nextjs, react};

/// Populate the tree with the frontend section's starter files
pub(super) fn generate(tree: &mut FileTree, front: &FrontendConfig, language: Language, name: &str) {
    let ext = language.component_ext();

    match front.framework {
        FrontendFramework::React => {
            tree.insert(format!("{name}/src/App.{ext}"), react::app_source(language));
            tree.insert(format!("{name}/src/components/Home.{ext}"), react::home_source(language));
            tree.insert(format!("{name}/src/components/About.{ext}"), react::about_source(language));
            tree.insert(
                format!("{name}/src/components/Navbar.{ext}"),
                react::navbar_source(language),
            );

            if front.styling == Styling::Tailwind {
                tree.insert(format!("{name}/tailwind.config.js"), TAILWIND_CONFIG_JS);
                tree.insert(format!("{name}/src/index.css"), TAILWIND_GLOBAL_CSS);
            }
        }
        FrontendFramework::Nextjs => {
            tree.insert(format!("{name}/src/app/layout.{ext}"), nextjs::layout_source(language));
            tree.insert(format!("{name}/src/app/page.{ext}"), nextjs::page_source(language));
            tree.insert(
                format!("{name}/src/app/about/page.{ext}"),
                nextjs::about_page_source(language),
            );
            tree.insert(
                format!("{name}/src/components/Navbar.{ext}"),
                nextjs::navbar_source(language),
            );

            if front.has_feature("api") {
                tree.insert(
                    format!("{name}/src/app/api/hello/route.{ext}"),
                    nextjs::api_route_source(language),
                );
            }
        }
        // No starter files wired up for these frameworks yet.
        FrontendFramework::Vue | FrontendFramework::Angular | FrontendFramework::Svelte | FrontendFramework::Vanilla => {}
    }
}
