#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod callback;
mod constants;
mod dom;
mod events;
mod highlight;
mod input;
mod session;
mod state;

pub use session::PickSession;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("pickballs-web starting");
    Ok(())
}
