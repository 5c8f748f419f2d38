// ==================== Imports ====================
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[macro_use]
mod browser;
pub mod engine;
pub mod game;
pub mod sprite;

#[cfg(test)]
mod test_support;

use engine::GameLoop;
use game::Shooter;

// ==================== Main Functions ====================
/// Main entry for Webassembly module
/// - installs the panic hook
/// - loads the game in a local task
/// - hands it to the frame loop
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    // setup better panic messages for debugging
    console_error_panic_hook::set_once();

    // wasm has no threads, spawn_local drives the future on the js event loop
    browser::spawn_local(async move {
        if let Err(err) = GameLoop::start(Shooter::new()).await {
            error!("Could not start the game : {:#}", err);
        }
    });

    Ok(())
}
