use crate::constants::{
    BUTTON_ACTIVE_BG_CLASS, BUTTON_ACTIVE_CLASS, BUTTON_IDLE_BG_CLASS, MUTATION_ATTR,
    MUTATION_BUTTON_SELECTOR, MUTATION_LABEL_ID, RESIDUE_VISUAL_ID,
};
use crate::core::{MutationSelector, SelectionUpdate};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Viewer {
    buttons: Vec<web::Element>,
    label: Option<web::Element>,
    visual: web::Element,
    selector: MutationSelector,
}

impl Viewer {
    fn apply(&self, update: &SelectionUpdate) {
        for (i, btn) in self.buttons.iter().enumerate() {
            let cl = btn.class_list();
            if self.selector.is_selected(i) {
                _ = cl.add_2(BUTTON_ACTIVE_CLASS, BUTTON_ACTIVE_BG_CLASS);
                _ = cl.remove_1(BUTTON_IDLE_BG_CLASS);
            } else {
                _ = cl.remove_2(BUTTON_ACTIVE_CLASS, BUTTON_ACTIVE_BG_CLASS);
                _ = cl.add_1(BUTTON_IDLE_BG_CLASS);
            }
        }
        if let Some(label) = &self.label {
            dom::set_text(label, &update.label);
        }
        self.visual.set_inner_html(update.graphic.markup());
    }
}

/// Wire the mutation toggle buttons to the residue illustration.
pub fn install(document: &web::Document) {
    let buttons = dom::query_all(document, MUTATION_BUTTON_SELECTOR);
    let visual = document.get_element_by_id(RESIDUE_VISUAL_ID);
    let visual = match visual {
        Some(v) if !buttons.is_empty() => v,
        _ => {
            log::debug!("[mutation] viewer markup absent; skipping");
            return;
        }
    };
    let names = buttons
        .iter()
        .map(|b| b.get_attribute(MUTATION_ATTR).unwrap_or_default())
        .collect::<Vec<_>>();
    let count = buttons.len();
    let viewer = Rc::new(RefCell::new(Viewer {
        buttons: buttons.clone(),
        label: document.get_element_by_id(MUTATION_LABEL_ID),
        visual,
        selector: MutationSelector::new(names),
    }));

    for (i, btn) in buttons.iter().enumerate() {
        let viewer = viewer.clone();
        dom::add_click_listener(btn, move || {
            let mut v = viewer.borrow_mut();
            if let Some(update) = v.selector.click(i) {
                if update.changed {
                    log::debug!("[mutation] selected {:?}", update.label);
                }
                v.apply(&update);
            }
        });
    }
    log::info!("[mutation] wired {} buttons", count);
}
