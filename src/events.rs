use crate::callback::CallbackSlot;
use crate::constants::RELEASE_EVENTS;
use crate::input;
use crate::state::SceneState;
use pickballs_core::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type Listener = CallbackSlot<js_sys::Function>;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<SceneState>>,
    pub listener: Listener,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}

/// Hand the lit ids to the renderer callback, if one is registered.
pub fn notify(listener: &Listener, ids: &[u32]) {
    if let Some(f) = listener.get() {
        let arr = js_sys::Uint32Array::from(ids);
        if let Err(e) = f.call1(&JsValue::NULL, &arr) {
            log::warn!("[highlight] listener threw: {:?}", e);
        }
    }
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let viewport = canvas_viewport(&w.canvas);
        let changed = w.state.borrow_mut().pointer_down(pos.x, pos.y, &viewport);
        if changed {
            let ids = w.state.borrow().highlight.ids();
            notify(&w.listener, &ids);
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if w.state.borrow_mut().pointer_up() {
            notify(&w.listener, &[]);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        for name in RELEASE_EVENTS {
            _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }

    closure.forget();
}
