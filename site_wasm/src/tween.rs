//! Typed handles over the page's animation globals
//!
//! The tween engine (`gsap`), its scroll-trigger plugin and the smooth-scroll
//! controller (`Lenis`) are page-level scripts. Each handle resolves once at
//! startup and is absent when the page never loaded the script, which
//! silently disables the features that need it.

use fx_core::Ease;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Property lookup that treats `undefined`/`null` as absent
fn get(obj: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Builder for a tween vars object
pub struct Vars(Object);

impl Vars {
    pub fn new() -> Self {
        Self(Object::new())
    }

    fn put(self, key: &str, value: &JsValue) -> Self {
        // Reflect::set only fails on sealed objects; this one is plain
        let _ = Reflect::set(&self.0, &JsValue::from_str(key), value);
        self
    }

    pub fn x(self, v: f64) -> Self {
        self.put("x", &v.into())
    }

    pub fn y(self, v: f64) -> Self {
        self.put("y", &v.into())
    }

    pub fn opacity(self, v: f64) -> Self {
        self.put("opacity", &v.into())
    }

    pub fn scale(self, v: f64) -> Self {
        self.put("scale", &v.into())
    }

    pub fn duration(self, seconds: f64) -> Self {
        self.put("duration", &seconds.into())
    }

    pub fn delay(self, seconds: f64) -> Self {
        self.put("delay", &seconds.into())
    }

    pub fn stagger(self, seconds: f64) -> Self {
        self.put("stagger", &seconds.into())
    }

    pub fn ease(self, ease: Ease) -> Self {
        self.put("ease", &JsValue::from_str(ease.as_str()))
    }

    pub fn transform(self, css: &str) -> Self {
        self.put("transform", &JsValue::from_str(css))
    }

    /// Nested scroll-trigger rule: fire when `trigger` crosses `start`
    pub fn scroll_trigger(self, trigger: &JsValue, start: &str) -> Self {
        let rule = Object::new();
        let _ = Reflect::set(&rule, &JsValue::from_str("trigger"), trigger);
        let _ = Reflect::set(
            &rule,
            &JsValue::from_str("start"),
            &JsValue::from_str(start),
        );
        self.put("scrollTrigger", rule.as_ref())
    }

    pub fn as_js(&self) -> &JsValue {
        self.0.as_ref()
    }
}

impl Default for Vars {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the page's tween engine
#[derive(Clone)]
pub struct Tween(Object);

impl Tween {
    /// Resolve the engine global, if the page loaded it
    pub fn from_window(window: &Window) -> Option<Self> {
        get(window.as_ref(), "gsap")?
            .dyn_into::<Object>()
            .ok()
            .map(Self)
    }

    fn method(&self, name: &str) -> Result<Function, JsValue> {
        get(self.0.as_ref(), name)
            .ok_or_else(|| JsValue::from_str(&format!("tween engine has no {}", name)))?
            .dyn_into::<Function>()
            .map_err(|_| JsValue::from_str(&format!("tween engine {} is not callable", name)))
    }

    /// Eased tween toward the given values
    pub fn to(&self, target: &JsValue, vars: &Vars) -> Result<(), JsValue> {
        self.method("to")?
            .call2(self.0.as_ref(), target, vars.as_js())?;
        Ok(())
    }

    /// Tween from the given values back to the element's natural state
    pub fn from(&self, target: &JsValue, vars: &Vars) -> Result<(), JsValue> {
        self.method("from")?
            .call2(self.0.as_ref(), target, vars.as_js())?;
        Ok(())
    }

    /// Pre-bound single-property setter for per-frame writes, no easing
    pub fn quick_setter(
        &self,
        target: &JsValue,
        property: &str,
        unit: &str,
    ) -> Result<QuickSetter, JsValue> {
        let setter = self.method("quickSetter")?.call3(
            self.0.as_ref(),
            target,
            &JsValue::from_str(property),
            &JsValue::from_str(unit),
        )?;
        setter
            .dyn_into::<Function>()
            .map(QuickSetter)
            .map_err(|_| JsValue::from_str("quickSetter did not return a function"))
    }

    pub fn timeline(&self) -> Result<Timeline, JsValue> {
        let tl = self.method("timeline")?.call0(self.0.as_ref())?;
        tl.dyn_into::<Object>()
            .map(Timeline)
            .map_err(|_| JsValue::from_str("timeline() did not return an object"))
    }

    pub fn register_plugin(&self, plugin: &JsValue) -> Result<(), JsValue> {
        self.method("registerPlugin")?
            .call1(self.0.as_ref(), plugin)?;
        Ok(())
    }
}

/// Single-property setter returned by the engine
pub struct QuickSetter(Function);

impl QuickSetter {
    pub fn set(&self, value: f64) {
        let _ = self.0.call1(&JsValue::UNDEFINED, &value.into());
    }
}

/// Sequenced timeline
pub struct Timeline(Object);

impl Timeline {
    fn add(
        &self,
        name: &str,
        target: &JsValue,
        vars: &Vars,
        offset: Option<&str>,
    ) -> Result<(), JsValue> {
        let f = get(self.0.as_ref(), name)
            .ok_or_else(|| JsValue::from_str(&format!("timeline has no {}", name)))?
            .dyn_into::<Function>()
            .map_err(|_| JsValue::from_str(&format!("timeline {} is not callable", name)))?;

        let args = Array::new();
        args.push(target);
        args.push(vars.as_js());
        if let Some(offset) = offset {
            args.push(&JsValue::from_str(offset));
        }
        Reflect::apply(&f, self.0.as_ref(), &args)?;
        Ok(())
    }

    pub fn to(&self, target: &JsValue, vars: &Vars, offset: Option<&str>) -> Result<(), JsValue> {
        self.add("to", target, vars, offset)
    }

    pub fn from(&self, target: &JsValue, vars: &Vars, offset: Option<&str>) -> Result<(), JsValue> {
        self.add("from", target, vars, offset)
    }
}

/// Presence handle for the scroll-trigger plugin
pub struct ScrollTriggerPlugin(JsValue);

impl ScrollTriggerPlugin {
    pub fn from_window(window: &Window) -> Option<Self> {
        get(window.as_ref(), "ScrollTrigger").map(Self)
    }

    pub fn as_js(&self) -> &JsValue {
        &self.0
    }
}

/// Handle to the smooth-scroll controller, constructed from its page global
pub struct SmoothScroll {
    instance: JsValue,
    raf: Function,
    // The controller keeps calling this for its whole life
    _easing: Closure<dyn Fn(f64) -> f64>,
}

impl SmoothScroll {
    pub fn new(window: &Window, config: &fx_core::Config) -> Option<Self> {
        let ctor = get(window.as_ref(), "Lenis")?.dyn_into::<Function>().ok()?;

        let easing =
            Closure::wrap(Box::new(fx_core::smooth_scroll_ease) as Box<dyn Fn(f64) -> f64>);
        let opts = Object::new();
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("duration"),
            &f64::from(config.scroll_duration).into(),
        );
        let _ = Reflect::set(&opts, &JsValue::from_str("easing"), easing.as_ref());
        let _ = Reflect::set(&opts, &JsValue::from_str("smooth"), &JsValue::TRUE);

        let instance = Reflect::construct(&ctor, &Array::of1(&opts)).ok()?;
        let raf = get(&instance, "raf")?.dyn_into::<Function>().ok()?;

        Some(Self {
            instance,
            raf,
            _easing: easing,
        })
    }

    /// Per-frame pump, driven from the display refresh callback
    pub fn pump(&self, time_ms: f64) {
        let _ = self.raf.call1(&self.instance, &time_ms.into());
    }
}
