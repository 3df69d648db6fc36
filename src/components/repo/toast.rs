//! Transient notification banner.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TOAST_DURATION_MS;

stylance::import_crate_style!(css, "src/components/repo/toast.module.css");

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let message = ctx.toast;

    // Each new message restarts the dismiss timer
    let timer = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        if message.with(Option::is_some) {
            let timeout = Timeout::new(TOAST_DURATION_MS, move || message.set(None));
            timer.set_value(Some(timeout));
        } else {
            timer.set_value(None);
        }
    });

    let dismiss = move |_: leptos::ev::MouseEvent| message.set(None);

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=css::toast role="alert">
                <Icon icon=ic::WARNING />
                <span class=css::message>{move || message.get().unwrap_or_default()}</span>
                <button class=css::close aria-label="Dismiss" on:click=dismiss>
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </Show>
    }
}
