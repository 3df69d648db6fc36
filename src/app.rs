//! Root application module.
//!
//! Contains the main App component and the AppContext definition, and wires
//! the browser services into the core controller.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use repoview_core::{ContentLoader, RepoController, RepoStore};
use tracing::info;
use wasm_bindgen_futures::spawn_local;

use crate::components::RepoBrowser;
use crate::components::router::HistoryListener;
use crate::config::{APP_NAME, MountConfig};
use crate::services::{MonacoEditor, ToastNotifier, WebController, WebTransport, WindowHistory};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// The store itself is not reactive: it lives inside the controller and is
/// shared with the loader. Components read it through [`AppContext::with_store`],
/// which subscribes them to `revision`; every operation that may have changed
/// the store bumps `revision` when it finishes.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<WebController>, LocalStorage>,
    /// Bumped after every store mutation.
    pub revision: RwSignal<u64>,
    /// Message shown by the toast, if any.
    pub toast: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(mount: &MountConfig) -> Self {
        let toast = RwSignal::new(None);

        let store = RepoStore::new(mount.project_url.clone()).shared();
        let loader = ContentLoader::new(
            store,
            WebTransport::new(mount.path.clone()),
            MonacoEditor::from_window(),
            WindowHistory,
        );
        let controller = RepoController::new(loader, ToastNotifier::new(toast));

        let revision = RwSignal::new(0);
        controller.track_edits(move || revision.update(|r| *r += 1));

        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            revision,
            toast,
        }
    }

    /// Read the store, tracking `revision`.
    pub fn with_store<R>(&self, f: impl FnOnce(&RepoStore) -> R) -> R {
        self.revision.track();
        self.controller.with_value(|c| f(&c.store().borrow()))
    }

    /// Run an async controller operation on the local executor.
    ///
    /// Readers are refreshed twice: once after the operation's synchronous
    /// prefix (loading flags) and once when it settles.
    pub fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(Rc<WebController>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        let revision = self.revision;
        spawn_local(async move {
            task(controller).await;
            revision.update(|r| *r += 1);
        });
        // Queued behind the first poll of the task above
        spawn_local(async move {
            revision.update(|r| *r += 1);
        });
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the root tree load
/// - Renders the repository browser
#[component]
pub fn App() -> impl IntoView {
    let mount = MountConfig::from_dom();
    info!(app = APP_NAME, project = %mount.project_url, path = %mount.path, "mounting repository browser");

    let ctx = AppContext::new(&mount);
    provide_context(ctx);

    ctx.spawn(|controller| async move {
        controller.open_root().await;
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="repoview-fatal">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <HistoryListener />
            <RepoBrowser />
        </ErrorBoundary>
    }
}
