//! Background canvas particle field

use std::cell::RefCell;
use std::rc::Rc;

use fx_core::{Config, FieldRng, ParticleField};
use glam::Vec2;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::dom;
use crate::frame::FrameLoop;

pub fn init(window: &Window, document: &Document, config: &Config) -> Result<(), JsValue> {
    let canvas = match dom::query_id(document, "bg-canvas") {
        Some(el) => el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("bg-canvas is not a canvas"))?,
        // No canvas on this page
        None => return Ok(()),
    };

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let extent = viewport_extent(window);
    set_canvas_size(&canvas, extent);

    let seed = window
        .performance()
        .map(|p| p.now() as u64)
        .unwrap_or_default();
    let mut rng = FieldRng::new(seed);
    let field = Rc::new(RefCell::new(ParticleField::spawn(config, extent, &mut rng)));

    // Resize swaps the drawable extent immediately; particle positions are
    // left alone until their next bounce check
    {
        let field = field.clone();
        let canvas = canvas.clone();
        let win = window.clone();
        EventListener::new(window, "resize", move |_| {
            let extent = viewport_extent(&win);
            set_canvas_size(&canvas, extent);
            field.borrow_mut().resize(extent);
        })
        .forget();
    }

    let fill = config.particle_fill;
    FrameLoop::start(move |_time| {
        let mut field = field.borrow_mut();
        let extent = field.extent();

        ctx.clear_rect(0.0, 0.0, f64::from(extent.x), f64::from(extent.y));
        ctx.set_fill_style_str(fill);

        field.step();
        for p in field.particles() {
            ctx.begin_path();
            let _ = ctx.arc(
                f64::from(p.pos.x),
                f64::from(p.pos.y),
                f64::from(p.radius),
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    })
    .forget();

    Ok(())
}

fn viewport_extent(window: &Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

fn set_canvas_size(canvas: &HtmlCanvasElement, extent: Vec2) {
    canvas.set_width(extent.x as u32);
    canvas.set_height(extent.y as u32);
}
