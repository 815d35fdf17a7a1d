use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Window};
use yew::prelude::*;

use crate::motion::scroll::{FrameCoalescer, ScrolledFlag};
use crate::motion::ScrollRange;

/// Passive window scroll listener that runs `on_frame` at most once per
/// animation frame, however many scroll events arrive in between.
/// Removing the listener and cancelling a pending frame happen on drop.
pub struct ScrollListener {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut(f64)>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl ScrollListener {
    pub fn new<F>(window: &Window, on_frame: F) -> Option<Self>
    where
        F: FnMut(&Window) + 'static,
    {
        let coalescer = Rc::new(RefCell::new(FrameCoalescer::new()));
        let pending = Rc::new(Cell::new(None));
        let on_frame = Rc::new(RefCell::new(on_frame));

        let frame_cb = {
            let window = window.clone();
            let coalescer = coalescer.clone();
            let pending = pending.clone();
            Rc::new(Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                coalescer.borrow_mut().fire();
                pending.set(None);
                (on_frame.borrow_mut())(&window);
            }))
        };

        let on_scroll = {
            let window = window.clone();
            let frame_cb = frame_cb.clone();
            let pending = pending.clone();
            Closure::<dyn FnMut()>::new(move || {
                if !coalescer.borrow_mut().request() {
                    return;
                }
                match window.request_animation_frame((*frame_cb).as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(e) => {
                        warn!("requestAnimationFrame failed: {:?}", e);
                        coalescer.borrow_mut().fire();
                    }
                }
            })
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Failed to attach scroll listener: {:?}", e);
            return None;
        }

        Some(Self {
            window: window.clone(),
            on_scroll,
            _on_frame: frame_cb,
            pending,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Whether the page has scrolled `threshold` pixels or more. Checked at
/// most once per frame; re-renders only when the answer flips.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| {
        let offset = web_sys::window().as_ref().map(scroll_y).unwrap_or(0.0);
        ScrolledFlag::new(threshold, offset).get()
    });

    {
        let setter = scrolled.setter();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = web_sys::window().and_then(|window| {
                    let mut flag = ScrolledFlag::new(threshold, scroll_y(&window));
                    setter.set(flag.get());
                    ScrollListener::new(&window, move |window| {
                        if let Some(next) = flag.update(scroll_y(window)) {
                            setter.set(next);
                        }
                    })
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

/// Progress of the element behind `node` through `range`, in [0, 1].
/// Tracks scrolling in both directions. Frames that leave the progress
/// unchanged, such as those far from the element, don't re-render.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let setter = progress.setter();
        use_effect_with_deps(
            move |(node, range)| {
                let range = *range;
                let node = node.clone();
                let measure = move |window: &Window| -> Option<f64> {
                    let element = node.cast::<Element>()?;
                    let rect = element.get_bounding_client_rect();
                    let viewport = window.inner_height().ok()?.as_f64()?;
                    Some(range.progress(rect.top(), rect.height(), viewport))
                };

                let listener = web_sys::window().and_then(|window| {
                    if let Some(p) = measure(&window) {
                        setter.set(p);
                    }
                    ScrollListener::new(&window, move |window| {
                        if let Some(p) = measure(window) {
                            setter.set(p);
                        }
                    })
                });
                move || drop(listener)
            },
            (node, range),
        );
    }

    *progress
}
