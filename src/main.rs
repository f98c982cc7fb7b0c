use leptos::prelude::*;
use modgrid::app::App;
use modgrid::config::{APP_NAME, APP_VERSION};
use modgrid::utils::logging;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("{} v{} starting", APP_NAME, APP_VERSION);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
