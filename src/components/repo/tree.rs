//! File tree component.
//!
//! The nested [`Node`] tree is flattened into rows in depth-first order;
//! indentation comes from each row's level.

use leptos::prelude::*;
use leptos_icons::Icon;
use repoview_core::{EntryKind, LastCommit, Node, NodeTarget};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::format_commit_date;

stylance::import_crate_style!(css, "src/components/repo/tree.module.css");

/// Indentation per tree level, in pixels.
const INDENT_PX: usize = 16;

/// One visible line of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub kind: EntryKind,
    pub name: String,
    pub url: String,
    pub level: usize,
    pub icon: String,
    pub opened: bool,
    pub loading: bool,
    pub last_commit: LastCommit,
}

impl Row {
    fn target(&self) -> NodeTarget {
        NodeTarget::new(self.kind, self.url.clone(), self.level)
    }
}

/// Flatten the visible part of the tree. Children of closed directories are
/// never visited.
pub fn visible_rows(nodes: &[Node]) -> Vec<Row> {
    let mut rows = Vec::new();
    push_rows(nodes, &mut rows);
    rows
}

fn push_rows(nodes: &[Node], rows: &mut Vec<Row>) {
    for node in nodes {
        rows.push(Row {
            kind: node.kind,
            name: node.name.clone(),
            url: node.url.clone(),
            level: node.level,
            icon: node.icon.clone(),
            opened: node.opened,
            loading: node.loading,
            last_commit: node.last_commit.clone(),
        });
        if node.opened {
            push_rows(&node.children, rows);
        }
    }
}

#[component]
pub fn FileTree() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let rows = Memo::new(move |_| ctx.with_store(|store| visible_rows(store.files())));
    let loading = Memo::new(move |_| ctx.with_store(|store| store.loading().tree));
    let show_parent = Memo::new(move |_| {
        ctx.with_store(|store| !store.is_root() && !store.prev_url().is_empty())
    });

    let open_parent = move |_: leptos::ev::MouseEvent| {
        ctx.spawn(|controller| async move {
            controller.open_parent().await;
        });
    };

    view! {
        <div class=css::tree role="tree" aria-label="Repository files">
            <Show when=move || loading.get()>
                <div class=css::treeLoading>
                    <span class=css::spinner><Icon icon=ic::SPINNER /></span>
                    "Loading files..."
                </div>
            </Show>
            <Show when=move || show_parent.get()>
                <div class=css::parentRow role="treeitem" on:click=open_parent>
                    <span class=css::rowIcon><Icon icon=ic::PARENT /></span>
                    <span class=css::rowName>".."</span>
                </div>
            </Show>
            <For
                each=move || rows.get()
                key=|row| (row.url.clone(), row.opened, row.loading)
                children=move |row| view! { <TreeRow row=row /> }
            />
        </div>
    }
}

#[component]
fn TreeRow(row: Row) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let target = row.target();
    let is_tree = row.kind == EntryKind::Tree;
    let is_submodule = row.kind == EntryKind::Submodule;
    let active = {
        let url = row.url.clone();
        Memo::new(move |_| ctx.with_store(|store| store.active_url() == Some(url.as_str())))
    };

    let handle_click = move |_: leptos::ev::MouseEvent| {
        let target = target.clone();
        ctx.spawn(|controller| async move {
            controller.toggle(target).await;
        });
    };

    let chevron = is_tree.then(|| {
        let icon = if row.opened {
            ic::CHEVRON_DOWN
        } else {
            ic::CHEVRON_RIGHT
        };
        view! { <span class=css::chevron><Icon icon=icon /></span> }
    });

    let row_class = move || {
        let mut class = css::row.to_string();
        if active.get() {
            class.push(' ');
            class.push_str(css::rowActive);
        }
        if is_submodule {
            class.push(' ');
            class.push_str(css::rowSubmodule);
        }
        class
    };

    let commit = (!row.last_commit.is_empty()).then(|| {
        let date = format_commit_date(&row.last_commit.updated_at).to_string();
        view! {
            <a class=css::commit href=row.last_commit.url.clone() title=row.last_commit.message.clone()>
                <span class=css::commitMessage>{row.last_commit.message.clone()}</span>
                <span class=css::commitDate>{date}</span>
            </a>
        }
    });

    view! {
        <div
            class=row_class
            role="treeitem"
            aria-expanded=is_tree.then(|| row.opened.to_string())
            style=format!("padding-left: {}px", row.level * INDENT_PX)
            on:click=handle_click
        >
            {chevron}
            <i class=format!("fa fa-fw {}", row.icon)></i>
            <span class=css::rowName>{row.name.clone()}</span>
            {row.loading.then(|| view! { <span class=css::spinner><Icon icon=ic::SPINNER /></span> })}
            {commit}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: EntryKind, name: &str, level: usize, children: Vec<Node>, opened: bool) -> Node {
        Node {
            kind,
            name: name.to_string(),
            url: format!("/{}", name),
            level,
            icon: "fa-folder".to_string(),
            children,
            opened,
            loading: false,
            last_commit: LastCommit::default(),
        }
    }

    #[test]
    fn test_visible_rows_depth_first() {
        let tree = vec![
            node(
                EntryKind::Tree,
                "lib",
                0,
                vec![
                    node(EntryKind::Tree, "util", 1, vec![], false),
                    node(EntryKind::Blob, "x.rb", 1, vec![], false),
                ],
                true,
            ),
            node(EntryKind::Blob, "a.rb", 0, vec![], false),
        ];

        let names: Vec<(String, usize)> = visible_rows(&tree)
            .into_iter()
            .map(|r| (r.name, r.level))
            .collect();
        assert_eq!(
            names,
            vec![
                ("lib".to_string(), 0),
                ("util".to_string(), 1),
                ("x.rb".to_string(), 1),
                ("a.rb".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_visible_rows_skips_closed_children() {
        let tree = vec![node(
            EntryKind::Tree,
            "lib",
            0,
            vec![node(EntryKind::Blob, "x.rb", 1, vec![], false)],
            false,
        )];
        assert_eq!(visible_rows(&tree).len(), 1);
    }

    #[test]
    fn test_row_target() {
        let row = &visible_rows(&[node(EntryKind::Blob, "a.rb", 2, vec![], false)])[0];
        assert_eq!(row.target(), NodeTarget::new(EntryKind::Blob, "/a.rb", 2));
    }
}
