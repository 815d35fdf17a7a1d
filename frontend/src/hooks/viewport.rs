use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::motion::visibility::{Rect, VisibilityGate};
use crate::motion::RootMargin;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    pub margin: RootMargin,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            margin: config::IN_VIEW_MARGIN,
        }
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// IntersectionObserver watching one element through a [`VisibilityGate`].
/// Disconnects itself once the gate has latched, and on drop.
pub struct ViewportObserver {
    observer: Option<IntersectionObserver>,
    _callback: Option<EntriesCallback>,
}

impl ViewportObserver {
    pub fn observe<F>(element: &Element, options: InViewOptions, notify: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        let gate = Rc::new(RefCell::new(VisibilityGate::new()));
        let notify: Rc<RefCell<dyn FnMut(bool)>> = Rc::new(RefCell::new(notify));

        // content already on screen latches without waiting for the observer
        if let Some(window) = web_sys::window() {
            let rect = element.get_bounding_client_rect();
            let rect = Rect::new(rect.top(), rect.left(), rect.width(), rect.height());
            let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
            if rect.intersects_viewport(width, height, options.margin) && gate.borrow_mut().observe(true) {
                (notify.borrow_mut())(true);
            }
        }
        if gate.borrow().is_triggered() {
            return Self {
                observer: None,
                _callback: None,
            };
        }

        let callback = {
            let gate = gate.clone();
            let notify = notify.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if gate.borrow_mut().observe(entry.is_intersecting()) {
                            (notify.borrow_mut())(true);
                        }
                    }
                    if gate.borrow().is_triggered() {
                        debug!("Visibility gate latched, disconnecting observer");
                        observer.disconnect();
                    }
                },
            )
        };

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.margin.to_css());
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable ({:?}), showing content immediately", e);
                if gate.borrow_mut().observe(true) {
                    (notify.borrow_mut())(true);
                }
                return Self {
                    observer: None,
                    _callback: None,
                };
            }
        };
        observer.observe(element);

        Self {
            observer: Some(observer),
            _callback: Some(callback),
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

/// True once the element behind `node` has come into view.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state(|| false);

    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let observer = match node.cast::<Element>() {
                    Some(element) => Some(ViewportObserver::observe(&element, *options, move |visible| {
                        setter.set(visible)
                    })),
                    None => {
                        warn!("use_in_view: node not mounted, showing content immediately");
                        setter.set(true);
                        None
                    }
                };
                move || drop(observer)
            },
            (node, options),
        );
    }

    *in_view
}
