//! Browser wiring for the site's decorative interaction layer
//!
//! All DOM access and third-party animation globals live here; the numeric
//! behavior (particle field, magnetic pull, tilt angles, menu state, feature
//! gating) comes from `fx_core`. Every feature silently stays inert when its
//! elements or its library are missing.

#![cfg(target_arch = "wasm32")]

mod cursor;
mod dom;
pub mod frame;
mod magnetic;
mod menu;
mod particles;
mod reveal;
mod scroll;
mod tilt;
mod tween;

use fx_core::{Capabilities, Config, FeaturePlan, PageKind};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use tween::{ScrollTriggerPlugin, Tween};

/// Wire every feature the current page and environment support
///
/// Called from the page script once the DOM is ready.
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = Config::default();
    let caps = Capabilities {
        fine_pointer: dom::media_matches(&window, config.pointer_media_query()),
        hover: dom::media_matches(&window, config.hover_media_query()),
        wide_viewport: dom::media_matches(&window, &config.desktop_media_query()),
    };
    let page = if dom::query(&document, ".error-code").is_some() {
        PageKind::Error
    } else {
        PageKind::Home
    };
    let plan = FeaturePlan::new(caps, page);

    let tween = Tween::from_window(&window);
    if tween.is_none() {
        web_sys::console::warn_1(&JsValue::from_str(
            "tween engine not loaded; animated features disabled",
        ));
    }

    if plan.cursor {
        if let Some(tween) = tween.as_ref() {
            cursor::init(&window, &document, tween, &config)?;
        }
    }
    if plan.magnetic {
        if let Some(tween) = tween.as_ref() {
            magnetic::init(&document, tween, &config)?;
        }
    }
    if plan.particles {
        particles::init(&window, &document, &config)?;
    }

    if plan.error_reveal {
        if let Some(tween) = tween.as_ref() {
            reveal::init_error(tween)?;
        }
        // Error page: nothing below runs
        return Ok(());
    }

    stamp_year(&document);

    if plan.smooth_scroll {
        scroll::init(&window, &config)?;
    }
    if plan.scroll_reveals {
        if let (Some(tween), Some(plugin)) =
            (tween.as_ref(), ScrollTriggerPlugin::from_window(&window))
        {
            reveal::init_home(&document, tween, &plugin)?;
        }
    }
    if plan.menu {
        menu::init(&document)?;
    }
    if plan.tilt {
        if let Some(tween) = tween.as_ref() {
            tilt::init(&document, tween, &config)?;
        }
    }

    Ok(())
}

/// Write the current year into the footer
fn stamp_year(document: &Document) {
    if let Some(el) = dom::query_id(document, "year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
