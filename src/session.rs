use crate::dom;
use crate::events::{self, canvas_viewport, InputWiring, Listener};
use crate::state::{error_text, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

fn to_js<E: Into<anyhow::Error>>(e: E) -> JsValue {
    JsValue::from_str(&error_text(e))
}

/// Picking bound to one canvas.
///
/// The JS renderer pushes its camera matrices and ball list, registers a
/// highlight callback, then calls `attach` to start listening for pointers.
#[wasm_bindgen]
pub struct PickSession {
    canvas: web::HtmlCanvasElement,
    state: Rc<RefCell<SceneState>>,
    listener: Listener,
    attached: bool,
}

#[wasm_bindgen]
impl PickSession {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PickSession, JsValue> {
        let canvas = dom::canvas_by_id(canvas_id).map_err(to_js)?;
        let aspect = canvas_viewport(&canvas).aspect();
        log::info!("[session] canvas #{} {}x{}", canvas_id, canvas.width(), canvas.height());
        Ok(PickSession {
            canvas,
            state: Rc::new(RefCell::new(SceneState::demo(aspect))),
            listener: Listener::default(),
            attached: false,
        })
    }

    /// Column-major view and projection matrices, 16 floats each.
    pub fn set_camera(&self, view: &[f32], projection: &[f32]) -> Result<(), JsValue> {
        self.state
            .borrow_mut()
            .set_camera(view, projection)
            .map_err(to_js)
    }

    /// Packed `[x, y, z, radius, ...]`; each ball's id is its index.
    pub fn set_targets(&self, packed: &[f32]) -> Result<(), JsValue> {
        let had_lit = !self.state.borrow().highlight.is_empty();
        self.state
            .borrow_mut()
            .set_packed_targets(packed)
            .map_err(to_js)?;
        if had_lit {
            events::notify(&self.listener, &[]);
        }
        Ok(())
    }

    pub fn set_highlight_all(&self, all: bool) {
        self.state.borrow_mut().set_highlight_all(all);
    }

    /// `callback(ids: Uint32Array)` runs whenever the lit set changes.
    pub fn on_highlight(&self, callback: js_sys::Function) {
        self.listener.set(callback);
    }

    /// Nearest ball under canvas pixel (`x`, `y`), without touching highlights.
    pub fn pick(&self, x: f32, y: f32) -> Result<Option<u32>, JsValue> {
        let viewport = canvas_viewport(&self.canvas);
        self.state
            .borrow_mut()
            .pick(x, y, &viewport)
            .map(|hit| hit.map(|h| h.id.0))
            .map_err(to_js)
    }

    pub fn highlighted(&self) -> Vec<u32> {
        self.state.borrow().highlight.ids()
    }

    /// Start listening for pointer events. Calling it again is a no-op.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        events::wire_input_handlers(InputWiring {
            canvas: self.canvas.clone(),
            state: self.state.clone(),
            listener: self.listener.clone(),
        });
        self.attached = true;
        log::info!("[session] pointer handlers attached");
    }
}
