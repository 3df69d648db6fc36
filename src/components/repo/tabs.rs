//! Tab strip over the opened files.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::TABS_ELEMENT_ID;
use crate::utils::dom::scroll_tabs_right;

stylance::import_crate_style!(css, "src/components/repo/tabs.module.css");

#[derive(Clone, Debug, PartialEq, Eq)]
struct Tab {
    url: String,
    name: String,
    active: bool,
    changed: bool,
}

#[component]
pub fn OpenedTabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let tabs = Memo::new(move |_| {
        ctx.with_store(|store| {
            store
                .opened_files()
                .iter()
                .map(|file| Tab {
                    url: file.url.clone(),
                    name: file.name.clone(),
                    active: file.active,
                    changed: file.changed,
                })
                .collect::<Vec<_>>()
        })
    });

    // Keep the newest tab in view
    Effect::new(move |prev_count: Option<usize>| {
        let count = tabs.with(Vec::len);
        if prev_count.is_some_and(|prev| count > prev) {
            scroll_tabs_right(TABS_ELEMENT_ID);
        }
        count
    });

    view! {
        <Show when=move || tabs.with(|t| !t.is_empty())>
            <ul id=TABS_ELEMENT_ID class=css::tabs role="tablist">
                <For
                    each=move || tabs.get()
                    key=|tab| (tab.url.clone(), tab.active, tab.changed)
                    children=move |tab| view! { <TabItem tab=tab /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn TabItem(tab: Tab) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let url = tab.url.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        let url = url.clone();
        ctx.spawn(|controller| async move {
            controller.activate_tab(&url).await;
        });
    };

    let class = if tab.active {
        format!("{} {}", css::tab, css::tabActive)
    } else {
        css::tab.to_string()
    };

    view! {
        <li class=class role="tab" aria-selected=tab.active.to_string() title=tab.url.clone() on:click=handle_click>
            <span class=css::tabName>{tab.name}</span>
            {tab.changed.then(|| view! { <span class=css::changed aria-label="modified">"*"</span> })}
        </li>
    }
}
