use crate::browser;
use anyhow::Result;
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Discrete key presses, identified by `KeyboardEvent.key`
/// - the keydown handler only queues the key
/// - the game loop drains the queue at the start of each frame, so input
///   is never applied in the middle of a draw
pub type KeySender = UnboundedSender<String>;
pub type KeyReceiver = UnboundedReceiver<String>;

pub fn key_channel() -> (KeySender, KeyReceiver) {
    unbounded()
}

/// Install the document `keydown` handler and return the receiving end
pub fn prepare_input() -> Result<KeyReceiver> {
    let (sender, receiver) = key_channel();
    let onkeydown = browser::closure_wrap(Box::new(move |event: KeyboardEvent| {
        // receiver lives as long as the game loop, a failed send means the
        // loop is gone and there is nobody left to tell
        let _ = sender.unbounded_send(event.key());
    }) as Box<dyn FnMut(KeyboardEvent)>);
    browser::document()?.set_onkeydown(Some(onkeydown.as_ref().unchecked_ref()));
    // keep the handler alive for the lifetime of the page
    onkeydown.forget();
    Ok(receiver)
}

/// Everything pressed since the last call, oldest first
pub fn drain(receiver: &mut KeyReceiver) -> Vec<String> {
    let mut keys = Vec::new();
    while let Ok(key) = receiver.try_recv() {
        keys.push(key);
    }
    keys
}
