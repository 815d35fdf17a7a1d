use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Runs `step` once per animation frame with the milliseconds elapsed since
/// the first frame, until `step` returns false. Dropping the loop cancels
/// the pending frame and releases the callback.
pub struct FrameLoop {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window()?;
        let handle = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let handle = handle.clone();
            let next = callback.clone();
            let mut origin = None::<f64>;
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                let start = *origin.get_or_insert(timestamp);
                handle.set(None);
                if !step(timestamp - start) {
                    return;
                }
                if let Some(cb) = next.borrow().as_ref() {
                    handle.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            })
        };

        let first = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()?;
        handle.set(Some(first));
        *callback.borrow_mut() = Some(closure);

        Some(Self {
            window,
            handle,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure -> Rc -> closure cycle
        self.callback.borrow_mut().take();
    }
}
