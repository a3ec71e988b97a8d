use crate::core::PointerTracker;
use crate::{dom, input};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window listeners feeding a [`PointerTracker`] and keeping the canvas
/// backing size in step with resizes. Dropping this removes every listener
/// it registered.
pub struct PointerListeners {
    window: web::Window,
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_touch_move: Closure<dyn FnMut(web::TouchEvent)>,
    on_touch_end: Closure<dyn FnMut(web::TouchEvent)>,
    on_resize: Closure<dyn FnMut()>,
}

pub fn wire_pointer_tracking(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    tracker: Rc<RefCell<PointerTracker>>,
) -> PointerListeners {
    let t = tracker.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let p = input::pointer_client(&ev);
        t.borrow_mut().on_move(p.x, p.y);
    }) as Box<dyn FnMut(_)>);

    let t = tracker.clone();
    let on_touch_move = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(p) = input::first_touch_client(&ev) {
            t.borrow_mut().on_move(p.x, p.y);
        }
    }) as Box<dyn FnMut(_)>);

    let t = tracker.clone();
    let on_touch_end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        t.borrow_mut().on_touch_end();
    }) as Box<dyn FnMut(_)>);

    let t = tracker;
    let wnd = window.clone();
    let canvas = canvas.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let size = input::viewport_size(&wnd);
        t.borrow_mut().set_viewport(size.x, size.y);
        // The frame loop picks up the new backing size and resizes the surface.
        if dom::sync_canvas_backing_size(&canvas) {
            log::debug!("[pointer] canvas resized to {}x{}", canvas.width(), canvas.height());
        }
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    _ = window
        .add_event_listener_with_callback("touchmove", on_touch_move.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

    PointerListeners {
        window: window.clone(),
        on_move,
        on_touch_move,
        on_touch_end,
        on_resize,
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        let w = &self.window;
        _ = w.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = w.remove_event_listener_with_callback(
            "touchmove",
            self.on_touch_move.as_ref().unchecked_ref(),
        );
        _ = w.remove_event_listener_with_callback(
            "touchend",
            self.on_touch_end.as_ref().unchecked_ref(),
        );
        _ = w.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        log::debug!("[pointer] listeners removed");
    }
}
