//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a `Closure` must keep the closure alive for
//! as long as it is attached. `closure.forget()` leaks it and leaves the
//! listener attached forever, so instead the closure is stored in a struct
//! that removes the listener on `Drop`:
//!
//! ```ignore
//! let listener = WindowEventListener::new(window, "blur", callback);
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```

use crate::placement::{Rect, Viewport};
use wasm_bindgen_x::prelude::*;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowEventListener {
    /// Attaches an event listener to the window.
    pub fn new(
        window: web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut() + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut()> = Closure::wrap(Box::new(callback));

        if window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach window '{}' listener", event_name);
        }

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Bounding box of an element in viewport coordinates
pub fn element_rect(element: &web_sys_x::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Current window size, or `None` outside a browser window
pub fn window_viewport() -> Option<Viewport> {
    let window = web_sys_x::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
