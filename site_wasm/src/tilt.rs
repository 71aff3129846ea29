//! Project card tilt with a pointer-following spotlight

use fx_core::{tilt, Config};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::dom;
use crate::tween::{Tween, Vars};

fn spotlight_of(card: &Element) -> Option<HtmlElement> {
    card.query_selector(".spotlight")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn init(document: &Document, tween: &Tween, config: &Config) -> Result<(), JsValue> {
    for card in dom::query_all(document, ".project-card") {
        {
            let target = card.clone();
            let tween = tween.clone();
            let config = config.clone();
            EventListener::new(&card, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let (local, size) = dom::pointer_in_element(event, &target);

                if let Some(spotlight) = spotlight_of(&target) {
                    let style = spotlight.style();
                    let _ = style.set_property("background", &tilt::spotlight_css(local, &config));
                    let _ = style.set_property("opacity", "1");
                }

                let (rotate_x, rotate_y) = tilt::angles(local, size, config.tilt_max_deg);
                let css = tilt::transform(rotate_x, rotate_y, config.tilt_hover_scale);
                let _ = tween.to(
                    target.as_ref(),
                    &Vars::new()
                        .transform(&css)
                        .duration(f64::from(config.tilt_follow_duration)),
                );
            })
            .forget();
        }

        {
            let target = card.clone();
            let tween = tween.clone();
            let duration = f64::from(config.tilt_release_duration);
            EventListener::new(&card, "mouseleave", move |_| {
                let _ = tween.to(
                    target.as_ref(),
                    &Vars::new()
                        .transform(&tilt::neutral_transform())
                        .duration(duration),
                );
                if let Some(spotlight) = spotlight_of(&target) {
                    let _ = spotlight.style().set_property("opacity", "0");
                }
            })
            .forget();
        }
    }

    Ok(())
}
