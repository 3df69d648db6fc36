//! Notifications surfaced through the toast component.

use leptos::prelude::*;
use repoview_core::Notifier;
use tracing::info;

/// Writes the latest message into a signal the toast renders.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    message: RwSignal<Option<String>>,
}

impl ToastNotifier {
    pub fn new(message: RwSignal<Option<String>>) -> Self {
        Self { message }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        info!(%message, "notify");
        self.message.set(Some(message.to_string()));
    }
}
