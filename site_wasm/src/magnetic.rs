//! Elements that lean toward the pointer while hovered

use fx_core::{magnet, Config, Ease};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, MouseEvent};

use crate::dom;
use crate::tween::{Tween, Vars};

pub fn init(document: &Document, tween: &Tween, config: &Config) -> Result<(), JsValue> {
    for el in dom::query_all(document, ".magnetic") {
        let strength =
            magnet::strength_from_attr(el.get_attribute("data-strength").as_deref(), config);

        {
            let target = el.clone();
            let tween = tween.clone();
            let duration = f64::from(config.magnet_follow_duration);
            EventListener::new(&el, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let offset = magnet::pull(
                    dom::pointer_pos(event),
                    dom::element_center(&target),
                    strength,
                );
                let _ = tween.to(
                    target.as_ref(),
                    &Vars::new()
                        .x(f64::from(offset.x))
                        .y(f64::from(offset.y))
                        .duration(duration)
                        .ease(Ease::Power3Out),
                );
            })
            .forget();
        }

        {
            let target = el.clone();
            let tween = tween.clone();
            let duration = f64::from(config.magnet_release_duration);
            EventListener::new(&el, "mouseleave", move |_| {
                // Snap back with an elastic overshoot
                let _ = tween.to(
                    target.as_ref(),
                    &Vars::new()
                        .x(0.0)
                        .y(0.0)
                        .duration(duration)
                        .ease(Ease::ElasticOut),
                );
            })
            .forget();
        }
    }

    Ok(())
}
