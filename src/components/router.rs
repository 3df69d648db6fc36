//! Browser back/forward handling.
//!
//! The location is the source of truth after a `popstate`: the transport is
//! re-pointed at `location.pathname` and the tree reloads from there. Forward
//! navigation inside the app pushes entries through the core's history sync,
//! so nothing here pushes state.

use leptos::prelude::*;
use tracing::debug;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::utils::dom;

#[component]
pub fn HistoryListener() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_popstate = move || {
        let path = dom::location_path();
        debug!(%path, "popstate");
        ctx.spawn(|controller| async move {
            controller.reload_at(&path).await;
        });
    };

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(on_popstate) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = on_popstate;
}
