//! Small DOM lookup and class helpers

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

pub fn query_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Pointer position in viewport coordinates
pub fn pointer_pos(event: &MouseEvent) -> Vec2 {
    Vec2::new(event.client_x() as f32, event.client_y() as f32)
}

/// Pointer position relative to the element's top-left corner, plus its size
pub fn pointer_in_element(event: &MouseEvent, el: &Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    let local = Vec2::new(
        event.client_x() as f32 - rect.left() as f32,
        event.client_y() as f32 - rect.top() as f32,
    );
    let size = Vec2::new(rect.width() as f32, rect.height() as f32);
    (local, size)
}

/// Element center in viewport coordinates
pub fn element_center(el: &Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        rect.left() as f32 + rect.width() as f32 / 2.0,
        rect.top() as f32 + rect.height() as f32 / 2.0,
    )
}
