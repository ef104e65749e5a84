use crate::constants::{
    REVEAL_PENDING_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD,
    REVEAL_VISIBLE_CLASS,
};
use crate::core::RevealTracker;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Hide every reveal target and show each one the first time it scrolls
/// into view. Hosts without `IntersectionObserver` keep the page static.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    if !dom::has_global("IntersectionObserver") {
        log::info!("[reveal] IntersectionObserver unavailable; leaving content static");
        return Ok(());
    }
    let targets = dom::query_all(document, REVEAL_SELECTORS);
    if targets.is_empty() {
        log::debug!("[reveal] no targets");
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::<web::Element>::default()));
    let tracker_cb = tracker.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if tracker_cb.borrow_mut().observe(&target, entry.is_intersecting()) {
                    _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let count = targets.len();
    let mut tracker = tracker.borrow_mut();
    for el in targets {
        _ = el.class_list().add_1(REVEAL_PENDING_CLASS);
        observer.observe(&el);
        tracker.register(el);
    }
    log::info!("[reveal] watching {} elements", count);
    Ok(())
}
