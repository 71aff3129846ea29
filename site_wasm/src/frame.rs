//! Frame loop driven by the display refresh callback

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};

/// A running per-frame loop
///
/// Dropping the handle leaves the loop running; call [`FrameLoop::stop`] to
/// end it after the current frame, or [`FrameLoop::forget`] to commit to
/// page-lifetime operation.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Start calling `tick` once per frame with the callback timestamp in
    /// milliseconds
    pub fn start(tick: impl FnMut(f64) + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let slot: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
        let tick: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(tick));

        schedule(running.clone(), slot, tick);
        Self { running }
    }

    /// End the loop after the current frame
    pub fn stop(&self) {
        self.running.set(false);
    }

    /// Keep running until page teardown
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

fn schedule(
    running: Rc<Cell<bool>>,
    slot: Rc<RefCell<Option<AnimationFrame>>>,
    tick: Rc<RefCell<dyn FnMut(f64)>>,
) {
    let handle = {
        let slot = slot.clone();
        request_animation_frame(move |time| {
            if !running.get() {
                slot.borrow_mut().take();
                return;
            }
            (tick.borrow_mut())(time);
            schedule(running, slot, tick);
        })
    };
    // The handle must stay alive for the callback to stay registered
    *slot.borrow_mut() = Some(handle);
}
