use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::contact::Acknowledgement;

#[derive(Clone, PartialEq)]
pub struct UseAcknowledgementHandle {
    pub acknowledged: bool,
    pub acknowledge: Callback<()>,
}

/// Flag raised by `acknowledge` that drops again after `window_ms`.
///
/// The timeout handle lives as long as the component. Raising the flag
/// again replaces (and so cancels) the previous timeout; unmounting tears
/// the model down and drops whatever timeout is left.
#[hook]
pub fn use_acknowledgement(window_ms: u32) -> UseAcknowledgementHandle {
    let acknowledged = use_state(|| false);
    let model = use_mut_ref(|| Acknowledgement::new(window_ms as f64));
    let timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let model = model.clone();
        let timer = timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(ticket) = model.borrow_mut().teardown() {
                        debug!("Dropping pending acknowledgement clear {:?}", ticket);
                    }
                    timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let acknowledge = {
        let setter = acknowledged.setter();
        Callback::from(move |_: ()| {
            let now = Date::now();
            let Some(ticket) = model.borrow_mut().submit(now) else {
                return;
            };
            let delay = model.borrow().remaining_ms(now).unwrap_or(0.0);
            setter.set(true);

            let model = model.clone();
            let setter = setter.clone();
            let timeout = Timeout::new(delay.ceil() as u32, move || {
                if model.borrow_mut().expire(ticket) {
                    setter.set(false);
                }
            });
            // replacing the old handle cancels it
            *timer.borrow_mut() = Some(timeout);
        })
    };

    UseAcknowledgementHandle {
        acknowledged: *acknowledged,
        acknowledge,
    }
}
