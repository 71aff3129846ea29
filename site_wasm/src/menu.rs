//! Mobile menu toggle

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::MenuState;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom;

fn apply(button: &Option<Element>, panel: &Option<Element>, open: bool) {
    if let Some(button) = button {
        dom::set_class(button, "active", open);
    }
    if let Some(panel) = panel {
        dom::set_class(panel, "active", open);
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let button = dom::query(document, ".mobile-menu-btn");
    let panel = dom::query(document, ".mobile-menu");

    // One owned flag per page load; closures share it
    let state = Rc::new(RefCell::new(MenuState::new()));

    if let Some(button_el) = button.clone() {
        let state = state.clone();
        let button = button.clone();
        let panel = panel.clone();
        EventListener::new(&button_el, "click", move |_| {
            let open = state.borrow_mut().toggle();
            apply(&button, &panel, open);
        })
        .forget();
    }

    // A link tap while the menu is open closes it; never the reverse
    for link in dom::query_all(document, ".m-link") {
        let state = state.clone();
        let button = button.clone();
        let panel = panel.clone();
        EventListener::new(&link, "click", move |_| {
            if state.borrow_mut().close_if_open() {
                apply(&button, &panel, false);
            }
        })
        .forget();
    }

    Ok(())
}
