#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod mutation;
mod reveal;
mod scores;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-enhancer starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let doc_ready = document.clone();
    dom::on_dom_ready(&document, move || enhance(&doc_ready))
}

// Each behavior guards itself on its own markup; one failing does not stop
// the others.
fn enhance(document: &web::Document) {
    if let Err(e) = reveal::install(document) {
        log::error!("[reveal] {:?}", e);
    }
    if let Err(e) = scores::install(document) {
        log::error!("[scores] {:?}", e);
    }
    mutation::install(document);
}
