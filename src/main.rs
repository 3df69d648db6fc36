mod app;
mod components;
mod config;
mod services;
mod utils;

use app::App;
use leptos::prelude::*;
use tracing::error;

use crate::config::{APP_ELEMENT_ID, debug_logging_requested};
use crate::utils::{dom, log};

fn main() {
    console_error_panic_hook::set_once();
    log::init_logging(debug_logging_requested());

    let Some(root) = dom::html_element_by_id(APP_ELEMENT_ID) else {
        error!(id = APP_ELEMENT_ID, "mount element not found");
        return;
    };

    mount_to(root, App).forget();
}
