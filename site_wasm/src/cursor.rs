//! Custom cursor: an immediate dot and an eased trailing ring

use fx_core::{Config, Ease};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, MouseEvent, Window};

use crate::dom;
use crate::tween::{Tween, Vars};

/// Elements whose hover swaps the cursor into its highlight state
const HOVERABLES: &str = "a, .magnetic, .project-card, .comm-node, .home-btn";

pub fn init(
    window: &Window,
    document: &Document,
    tween: &Tween,
    config: &Config,
) -> Result<(), JsValue> {
    let (dot, ring) = match (
        dom::query(document, ".cursor-dot"),
        dom::query(document, ".cursor-ring"),
    ) {
        (Some(dot), Some(ring)) => (dot, ring),
        // Page carries no custom cursor markup
        _ => return Ok(()),
    };

    // The dot tracks the pointer with no easing
    let set_x = tween.quick_setter(dot.as_ref(), "x", "px")?;
    let set_y = tween.quick_setter(dot.as_ref(), "y", "px")?;

    {
        let tween = tween.clone();
        let ring = ring.clone();
        let duration = f64::from(config.ring_follow_duration);
        EventListener::new(window, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let x = f64::from(event.client_x());
            let y = f64::from(event.client_y());
            set_x.set(x);
            set_y.set(y);

            // The ring trails behind
            let _ = tween.to(
                ring.as_ref(),
                &Vars::new()
                    .x(x)
                    .y(y)
                    .duration(duration)
                    .ease(Ease::Power2Out),
            );
        })
        .forget();
    }

    // Hover state: body-level class plus a ring scale boost
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let hover_scale = f64::from(config.ring_hover_scale);

    for el in dom::query_all(document, HOVERABLES) {
        {
            let tween = tween.clone();
            let ring = ring.clone();
            let body = body.clone();
            EventListener::new(&el, "mouseenter", move |_| {
                dom::add_class(&body, "hovering");
                let _ = tween.to(ring.as_ref(), &Vars::new().scale(hover_scale));
            })
            .forget();
        }
        {
            let tween = tween.clone();
            let ring = ring.clone();
            let body = body.clone();
            EventListener::new(&el, "mouseleave", move |_| {
                dom::remove_class(&body, "hovering");
                let _ = tween.to(ring.as_ref(), &Vars::new().scale(1.0));
            })
            .forget();
        }
    }

    Ok(())
}
