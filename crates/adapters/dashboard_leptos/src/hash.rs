//! Location-hash routing.
//!
//! The admin panel keeps its route in `location.hash` so that reloads and
//! the back button land on the same screen.

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// The current `location.hash`, including the leading `#` when present.
pub fn current() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Navigate to `hash`. Fires `hashchange` only if the hash differs.
pub fn set(hash: &str) {
    if let Some(window) = web_sys::window()
        && let Err(err) = window.location().set_hash(hash)
    {
        leptos::logging::warn!("failed to set location hash: {err:?}");
    }
}

/// Guard that removes the `hashchange` listener on drop.
pub struct HashListener {
    window: Window,
    on_change: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for HashListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "hashchange",
            self.on_change.as_ref().unchecked_ref(),
        );
    }
}

/// Call `on_change` with the new hash whenever it changes.
///
/// Returns `None` when there is no window or the listener cannot be added.
pub fn listen(mut on_change: impl FnMut(String) + 'static) -> Option<HashListener> {
    let window = web_sys::window()?;

    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        on_change(current());
    });

    if let Err(err) =
        window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
    {
        leptos::logging::warn!("failed to listen for hash changes: {err:?}");
        return None;
    }

    Some(HashListener {
        window,
        on_change: callback,
    })
}
