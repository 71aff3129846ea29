//! Smooth scrolling driven from the frame callback

use fx_core::Config;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::frame::FrameLoop;
use crate::tween::SmoothScroll;

pub fn init(window: &Window, config: &Config) -> Result<(), JsValue> {
    // Controller script not loaded: the page scrolls natively
    let Some(scroll) = SmoothScroll::new(window, config) else {
        return Ok(());
    };

    FrameLoop::start(move |time| scroll.pump(time)).forget();
    Ok(())
}
