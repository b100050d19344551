//! Window width subscription.
//!
//! `use_window_width` attaches a `resize` listener on mount, reports the
//! current width once after the first render, and removes the listener when
//! the owning component is dropped. Server rendering never reports a width.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

type WidthCallback = Rc<RefCell<Box<dyn FnMut(f64)>>>;

/// Call `on_width` with `window.innerWidth` now and on every resize.
pub fn use_window_width(on_width: impl FnMut(f64) + 'static) {
    let listener = use_hook(move || {
        let callback: WidthCallback = Rc::new(RefCell::new(Box::new(on_width)));
        Rc::new(ResizeListener::attach(callback))
    });

    let initial = listener.clone();
    use_effect(move || initial.report());

    use_drop(move || listener.detach());
}

struct ResizeListener {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    callback: WidthCallback,
    #[cfg(target_arch = "wasm32")]
    closure: Option<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
impl ResizeListener {
    fn attach(callback: WidthCallback) -> Self {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let on_resize = callback.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(width) = window_width() {
                (on_resize.borrow_mut())(width);
            }
        });

        let attached = web_sys::window().and_then(|window| {
            window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .ok()
        });
        if attached.is_none() {
            tracing::warn!("Could not subscribe to window resize");
        }

        Self {
            callback,
            closure: attached.map(|_| closure),
        }
    }

    fn report(&self) {
        if let Some(width) = window_width() {
            (self.callback.borrow_mut())(width);
        }
    }

    fn detach(&self) {
        use wasm_bindgen::JsCast;

        if let (Some(window), Some(closure)) = (web_sys::window(), &self.closure) {
            if window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::warn!("Could not unsubscribe from window resize");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
impl ResizeListener {
    fn attach(callback: WidthCallback) -> Self {
        Self { callback }
    }

    fn report(&self) {}

    fn detach(&self) {}
}
