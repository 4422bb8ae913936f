mod app;
mod chart;
mod colors;
mod config;
mod loader;
mod logging;

use leptos::mount::mount_to;
use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

thread_local! {
    static MOUNTED_APP: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    match mount_target() {
        Some(target) => mount(target),
        None => tracing::error!(id = config::MOUNT_ID, "no mount target, chart not rendered"),
    }
}

/// `#app` when present, else `<body>`.
fn mount_target() -> Option<HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(config::MOUNT_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .or_else(|| document.body())
}

fn mount(target: HtmlElement) {
    MOUNTED_APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        // At most one chart per page.
        drop(slot.take());
        *slot = Some(Box::new(mount_to(target, app::App)));
    });
}
