//! Entrance timelines and scroll-triggered reveals

use fx_core::reveal::{self, ScrollReveal, StepKind, TimelineStep};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom;
use crate::tween::{ScrollTriggerPlugin, Tween, Vars};

/// Error-page reveal: the only animation that page runs
pub fn init_error(tween: &Tween) -> Result<(), JsValue> {
    play_timeline(tween, &reveal::error_steps())
}

/// Hero entrance plus the scroll-triggered reveals
pub fn init_home(
    document: &Document,
    tween: &Tween,
    plugin: &ScrollTriggerPlugin,
) -> Result<(), JsValue> {
    tween.register_plugin(plugin.as_js())?;

    play_timeline(tween, &reveal::hero_steps())?;
    register_scroll_reveal(document, tween, &reveal::fade_up())?;
    register_scroll_reveal(document, tween, &reveal::tech_stack())?;
    Ok(())
}

fn step_vars(step: &TimelineStep) -> Vars {
    let mut vars = Vars::new()
        .y(f64::from(step.y))
        .duration(f64::from(step.duration));
    if let Some(opacity) = step.opacity {
        vars = vars.opacity(f64::from(opacity));
    }
    if step.delay > 0.0 {
        vars = vars.delay(f64::from(step.delay));
    }
    if step.stagger > 0.0 {
        vars = vars.stagger(f64::from(step.stagger));
    }
    if let Some(ease) = step.ease {
        vars = vars.ease(ease);
    }
    vars
}

fn play_timeline(tween: &Tween, steps: &[TimelineStep]) -> Result<(), JsValue> {
    let timeline = tween.timeline()?;
    for step in steps {
        let target = JsValue::from_str(step.selector);
        let vars = step_vars(step);
        match step.kind {
            StepKind::To => timeline.to(&target, &vars, step.offset)?,
            StepKind::From => timeline.from(&target, &vars, step.offset)?,
        }
    }
    Ok(())
}

fn reveal_vars(rule: &ScrollReveal, trigger: &JsValue) -> Vars {
    let mut vars = Vars::new()
        .y(f64::from(rule.y))
        .opacity(f64::from(rule.opacity))
        .duration(f64::from(rule.duration))
        .ease(rule.ease)
        .scroll_trigger(trigger, rule.start);
    if rule.stagger > 0.0 {
        vars = vars.stagger(f64::from(rule.stagger));
    }
    vars
}

fn register_scroll_reveal(
    document: &Document,
    tween: &Tween,
    rule: &ScrollReveal,
) -> Result<(), JsValue> {
    if rule.per_element {
        // Each element is both the tween target and its own trigger
        for el in dom::query_all(document, rule.target) {
            let el: JsValue = el.into();
            tween.from(&el, &reveal_vars(rule, &el))?;
        }
    } else {
        let target = JsValue::from_str(rule.target);
        let trigger = JsValue::from_str(rule.trigger);
        tween.from(&target, &reveal_vars(rule, &trigger))?;
    }
    Ok(())
}
