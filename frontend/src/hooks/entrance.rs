use log::warn;
use yew::prelude::*;

use super::frame::FrameLoop;
use crate::motion::entrance::Pose;
use crate::motion::Timeline;

/// Poses for every entry of `timeline`. Everything stays hidden until
/// `triggered` goes true, then plays once; frames stop being requested
/// after the last entry has finished.
#[hook]
pub fn use_entrance(triggered: bool, timeline: Timeline) -> Vec<Pose> {
    let elapsed = use_state(|| None::<f64>);

    {
        let setter = elapsed.setter();
        let end_ms = timeline.end_ms();
        use_effect_with_deps(
            move |triggered| {
                let frames = if *triggered {
                    let step_setter = setter.clone();
                    let frames = FrameLoop::start(move |ms| {
                        step_setter.set(Some(ms));
                        ms < end_ms
                    });
                    if frames.is_none() {
                        warn!("No animation frames available, skipping entrance");
                        setter.set(Some(end_ms));
                    }
                    frames
                } else {
                    None
                };
                move || drop(frames)
            },
            triggered,
        );
    }

    timeline.sample(*elapsed)
}

/// Inline style for entry `index`, or the empty string if there is none.
pub fn style_at(poses: &[Pose], index: usize) -> String {
    poses.get(index).map(Pose::to_style).unwrap_or_default()
}
