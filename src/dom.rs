use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order. An invalid selector
/// yields an empty list.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] bad selector {selector:?}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Run `handler` every `interval_ms` for the rest of the page's life.
pub fn set_interval(interval_ms: i32, mut handler: impl FnMut() + 'static) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        )
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
    closure.forget();
    Ok(id)
}

/// Invoke `handler` once the DOM is parsed: right away if that already
/// happened, otherwise on `DOMContentLoaded`.
pub fn on_dom_ready(
    document: &web::Document,
    handler: impl FnOnce() + 'static,
) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        handler();
        return Ok(());
    }
    let callback = Closure::once_into_js(handler);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded listener failed: {:?}", e))
}

/// Whether the host exposes `name` on the global object.
pub fn has_global(name: &str) -> bool {
    match web::window() {
        Some(w) => js_sys::Reflect::has(&w, &wasm_bindgen::JsValue::from_str(name)).unwrap_or(false),
        None => false,
    }
}
