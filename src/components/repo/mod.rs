//! Repository browser layout: file tree beside the tabs and content pane.

mod preview;
mod tabs;
mod toast;
mod tree;

pub use preview::PreviewPane;
pub use tabs::OpenedTabs;
pub use toast::Toast;
pub use tree::FileTree;

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/repo/layout.module.css");

#[component]
pub fn RepoBrowser() -> impl IntoView {
    view! {
        <div class=css::layout>
            <aside class=css::sidebar>
                <FileTree />
            </aside>
            <main class=css::content>
                <OpenedTabs />
                <PreviewPane />
            </main>
            <Toast />
        </div>
    }
}
