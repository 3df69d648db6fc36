//! Content pane for the active file.
//!
//! In preview view it shows the server-rendered HTML or, for binary files,
//! the side-loaded content. In edit view the Monaco container takes over.
//! The container stays mounted in both views so the editor instance
//! survives toggling.

use leptos::prelude::*;
use leptos_icons::Icon;
use repoview_core::FileRecord;
use repoview_core::editor::is_renderable;
use repoview_core::tracker::find_active_in_opened;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::EDITOR_ELEMENT_ID;
use crate::utils::format::format_size;
use crate::utils::html::{data_url, sanitize_html};

stylance::import_crate_style!(css, "src/components/repo/preview.module.css");

/// What the preview pane shows for a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewBody {
    Nothing,
    TooLarge { size: u64 },
    Image { src: String },
    BinaryPending,
    Binary,
    Html(String),
    Plain(String),
}

impl PreviewBody {
    pub fn for_file(file: &FileRecord) -> Self {
        if file.url.is_empty() {
            return Self::Nothing;
        }
        if file.too_large {
            return Self::TooLarge { size: file.size };
        }
        if file.binary {
            return match &file.base64 {
                Some(b64) if file.mime_type.starts_with("image/") => Self::Image {
                    src: data_url(&file.mime_type, b64),
                },
                Some(_) => Self::Binary,
                None => Self::BinaryPending,
            };
        }
        if !file.html.is_empty() {
            return Self::Html(file.html.clone());
        }
        Self::Plain(file.plain.clone())
    }
}

#[component]
pub fn PreviewPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let preview = Memo::new(move |_| ctx.with_store(|store| store.is_preview_view()));
    let binary = Memo::new(move |_| ctx.with_store(|store| store.binary()));
    let active = Memo::new(move |_| ctx.with_store(|store| find_active_in_opened(store).cloned()));
    let body = Memo::new(move |_| {
        active.with(|file| file.as_ref().map_or(PreviewBody::Nothing, PreviewBody::for_file))
    });

    let toggle_view = move |_: leptos::ev::MouseEvent| {
        ctx.spawn(|controller| async move {
            controller.toggle_view().await;
        });
    };

    let editor_class = move || {
        if preview.get() {
            format!("{} {}", css::editor, css::hidden)
        } else {
            css::editor.to_string()
        }
    };

    view! {
        <section class=css::pane>
            <header class=css::toolbar>
                <span class=css::fileName>
                    {move || active.with(|f| f.as_ref().map(|f| f.name.clone()).unwrap_or_default())}
                </span>
                <Show when=move || active.with(|f| f.as_ref().is_some_and(|f| is_renderable(&f.extension)))>
                    <span class=css::badge>"renderable"</span>
                </Show>
                <button
                    class=css::toggle
                    disabled=move || binary.get()
                    title=move || if preview.get() { "Edit" } else { "Preview" }
                    on:click=toggle_view
                >
                    {move || if preview.get() {
                        view! { <Icon icon=ic::EDIT /> }
                    } else {
                        view! { <Icon icon=ic::PREVIEW /> }
                    }}
                </button>
            </header>

            <Show when=move || preview.get()>
                <PreviewContent body=body />
            </Show>
            <div id=EDITOR_ELEMENT_ID class=editor_class></div>
        </section>
    }
}

#[component]
fn PreviewContent(body: Memo<PreviewBody>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let load_binary = move |_: leptos::ev::MouseEvent| {
        let Some(url) = ctx.with_store(|store| store.active_url().map(str::to_string)) else {
            return;
        };
        ctx.spawn(|controller| async move {
            controller.load_binary(&url).await;
        });
    };

    move || match body.get() {
        PreviewBody::Nothing => view! {
            <div class=css::empty>"Select a file to view its contents."</div>
        }
        .into_any(),
        PreviewBody::TooLarge { size } => view! {
            <div class=css::notice>
                <Icon icon=ic::WARNING />
                {format!("This file ({}) is too large to display.", format_size(size))}
            </div>
        }
        .into_any(),
        PreviewBody::Image { src } => view! {
            <div class=css::media><img src=src alt="" /></div>
        }
        .into_any(),
        PreviewBody::BinaryPending => view! {
            <div class=css::notice>
                "Binary content is not loaded."
                <button class=css::retry on:click=load_binary>"Load"</button>
            </div>
        }
        .into_any(),
        PreviewBody::Binary => view! {
            <div class=css::notice>"This binary file cannot be previewed."</div>
        }
        .into_any(),
        PreviewBody::Html(html) => view! {
            <article class=css::rendered inner_html=sanitize_html(&html)></article>
        }
        .into_any(),
        PreviewBody::Plain(text) => view! {
            <pre class=css::plain>{text}</pre>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> FileRecord {
        FileRecord {
            url: "/blob/a".to_string(),
            ..FileRecord::default()
        }
    }

    #[test]
    fn test_nothing_without_url() {
        assert_eq!(
            PreviewBody::for_file(&FileRecord::default_active()),
            PreviewBody::Nothing
        );
    }

    #[test]
    fn test_too_large_wins() {
        let f = FileRecord {
            too_large: true,
            binary: true,
            size: 42,
            ..file()
        };
        assert_eq!(PreviewBody::for_file(&f), PreviewBody::TooLarge { size: 42 });
    }

    #[test]
    fn test_binary_states() {
        let pending = FileRecord {
            binary: true,
            mime_type: "image/png".to_string(),
            ..file()
        };
        assert_eq!(PreviewBody::for_file(&pending), PreviewBody::BinaryPending);

        let image = FileRecord {
            base64: Some("AAAA".to_string()),
            ..pending.clone()
        };
        assert_eq!(
            PreviewBody::for_file(&image),
            PreviewBody::Image {
                src: "data:image/png;base64,AAAA".to_string()
            }
        );

        let other = FileRecord {
            mime_type: "application/zip".to_string(),
            ..image
        };
        assert_eq!(PreviewBody::for_file(&other), PreviewBody::Binary);
    }

    #[test]
    fn test_html_before_plain() {
        let f = FileRecord {
            html: "<p>hi</p>".to_string(),
            plain: "hi".to_string(),
            ..file()
        };
        assert_eq!(PreviewBody::for_file(&f), PreviewBody::Html("<p>hi</p>".to_string()));

        let f = FileRecord {
            plain: "hi".to_string(),
            ..file()
        };
        assert_eq!(PreviewBody::for_file(&f), PreviewBody::Plain("hi".to_string()));
    }
}
