use log::warn;
use yew::prelude::*;

use super::frame::FrameLoop;
use crate::motion::{CountUp, SpringConfig};

/// Integer counting from 0 to `target` once `triggered` is set.
#[hook]
pub fn use_count_up(target: u32, triggered: bool) -> u32 {
    let shown = use_state(|| 0_u32);

    {
        let setter = shown.setter();
        use_effect_with_deps(
            move |(target, triggered)| {
                let target = *target;
                let mut frames = None;
                if *triggered {
                    let mut count = CountUp::new(target, SpringConfig::COUNT_UP);
                    count.start();
                    let mut last_ms = 0.0;
                    let step_setter = setter.clone();
                    frames = FrameLoop::start(move |ms| {
                        let running = count.advance(ms - last_ms);
                        last_ms = ms;
                        step_setter.set(count.displayed());
                        running
                    });
                    if frames.is_none() {
                        warn!("No animation frames available, showing final count");
                        setter.set(target);
                    }
                }
                move || drop(frames)
            },
            (target, triggered),
        );
    }

    *shown
}
