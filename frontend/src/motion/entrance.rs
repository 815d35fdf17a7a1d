//! Entrance transitions: hidden/visible poses interpolated over time once a
//! visibility gate has fired.
//!
//! Everything here is a pure function of elapsed milliseconds since the
//! gate fired (`None` while it is still pending), so the browser side only
//! has to feed frame timestamps in and write the resulting style out.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::easing::Easing;

/// Visual property an entrance can animate
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Opacity,
    X,
    Y,
    Scale,
}

impl Property {
    pub const ALL: [Property; 4] = [Property::Opacity, Property::X, Property::Y, Property::Scale];

    /// Value a property has when a pose doesn't mention it.
    pub fn identity(self) -> f64 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::X | Property::Y => 0.0,
        }
    }
}

/// A set of property values. Properties that aren't set read as identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose(BTreeMap<Property, f64>);

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: Property, value: f64) -> Self {
        self.0.insert(property, value);
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(Property::Opacity, value)
    }

    pub fn x(self, value: f64) -> Self {
        self.with(Property::X, value)
    }

    pub fn y(self, value: f64) -> Self {
        self.with(Property::Y, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(Property::Scale, value)
    }

    pub fn get(&self, property: Property) -> f64 {
        self.0.get(&property).copied().unwrap_or_else(|| property.identity())
    }

    /// Interpolates every property mentioned by either pose.
    pub fn lerp(from: &Pose, to: &Pose, progress: f64) -> Pose {
        let mut out = BTreeMap::new();
        for property in Property::ALL {
            if !from.0.contains_key(&property) && !to.0.contains_key(&property) {
                continue;
            }
            let a = from.get(property);
            let b = to.get(property);
            out.insert(property, a + (b - a) * progress);
        }
        Pose(out)
    }

    /// Inline CSS for this pose (`opacity` plus a single `transform`).
    pub fn to_style(&self) -> String {
        let mut style = String::new();
        if self.0.contains_key(&Property::Opacity) {
            let _ = write!(style, "opacity: {:.4};", self.get(Property::Opacity));
        }
        let has_transform = [Property::X, Property::Y, Property::Scale]
            .iter()
            .any(|p| self.0.contains_key(p));
        if has_transform {
            let _ = write!(
                style,
                " transform: translate({:.2}px, {:.2}px) scale({:.4});",
                self.get(Property::X),
                self.get(Property::Y),
                self.get(Property::Scale),
            );
        }
        style.trim_start().to_string()
    }
}

/// Timing of one entrance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Animating,
    Visible,
}

/// Hidden and visible poses plus the transition between them
#[derive(Clone, Debug, PartialEq)]
pub struct Variants {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

impl Variants {
    pub fn new(hidden: Pose, visible: Pose, transition: Transition) -> Self {
        Self {
            hidden,
            visible,
            transition,
        }
    }

    /// Same variants with extra delay added on top of the configured one.
    pub fn delayed(&self, extra_ms: f64) -> Self {
        let mut next = self.clone();
        next.transition.delay_ms += extra_ms;
        next
    }

    /// Time at which this entrance starts, relative to the gate firing.
    pub fn start_ms(&self) -> f64 {
        self.transition.delay_ms
    }

    pub fn end_ms(&self) -> f64 {
        self.transition.delay_ms + self.transition.duration_ms.max(0.0)
    }

    pub fn phase(&self, elapsed: Option<f64>) -> Phase {
        match elapsed {
            None => Phase::Hidden,
            Some(ms) if ms <= self.start_ms() => Phase::Hidden,
            Some(ms) if ms >= self.end_ms() => Phase::Visible,
            Some(_) => Phase::Animating,
        }
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self, elapsed: Option<f64>) -> f64 {
        match self.phase(elapsed) {
            Phase::Hidden => 0.0,
            Phase::Visible => 1.0,
            Phase::Animating => {
                let local = elapsed.unwrap_or(0.0) - self.start_ms();
                let t = local / self.transition.duration_ms;
                self.transition.easing.apply(t)
            }
        }
    }

    pub fn sample(&self, elapsed: Option<f64>) -> Pose {
        match self.phase(elapsed) {
            Phase::Hidden => self.hidden.clone(),
            // exact target, no accumulated float error
            Phase::Visible => self.visible.clone(),
            Phase::Animating => Pose::lerp(&self.hidden, &self.visible, self.progress(elapsed)),
        }
    }
}

/// Per-child delay for a group of entrances sharing one gate
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stagger {
    pub delay_children_ms: f64,
    pub stagger_children_ms: f64,
}

impl Stagger {
    pub fn new(delay_children_ms: f64, stagger_children_ms: f64) -> Self {
        Self {
            delay_children_ms,
            stagger_children_ms,
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children_ms + index as f64 * self.stagger_children_ms
    }
}

/// Ordered entrances that all key off a single gate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<Variants>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` copies of `variants`, child `i` delayed by `stagger.delay_for(i)`.
    pub fn staggered(variants: &Variants, stagger: Stagger, count: usize) -> Self {
        let entries = (0..count)
            .map(|i| variants.delayed(stagger.delay_for(i)))
            .collect();
        Self { entries }
    }

    pub fn push(mut self, variants: Variants) -> Self {
        self.entries.push(variants);
        self
    }

    pub fn extend(mut self, other: Timeline) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn entries(&self) -> &[Variants] {
        &self.entries
    }

    /// When the last entrance finishes.
    pub fn end_ms(&self) -> f64 {
        self.entries
            .iter()
            .map(Variants::end_ms)
            .fold(0.0, f64::max)
    }

    pub fn sample(&self, elapsed: Option<f64>) -> Vec<Pose> {
        self.entries.iter().map(|v| v.sample(elapsed)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide_in_from_left() -> Variants {
        Variants::new(
            Pose::new().opacity(0.0).x(-60.0),
            Pose::new().opacity(1.0).x(0.0),
            Transition::new(800.0),
        )
    }

    #[test]
    fn test_pending_gate_pins_hidden_pose() {
        let v = slide_in_from_left();
        assert_eq!(v.sample(None), v.hidden);
        assert_eq!(v.phase(None), Phase::Hidden);
    }

    #[test]
    fn test_completion_lands_exactly_on_visible() {
        let curves = [
            Easing::EaseOut,
            Easing::NAV_SLIDE,
            Easing::CubicBezier(0.68, -0.55, 0.27, 1.55),
        ];
        for easing in curves {
            let v = Variants::new(
                Pose::new().opacity(0.0).x(-60.0),
                Pose::new().opacity(1.0).x(0.0),
                Transition::new(800.0).easing(easing),
            )
            .delayed(200.0);
            let pose = v.sample(Some(v.end_ms()));
            assert_eq!(pose.get(Property::Opacity), 1.0);
            assert_eq!(pose.get(Property::X), 0.0);
            assert_eq!(v.sample(Some(10_000.0)), v.visible);
        }
    }

    #[test]
    fn test_progress_is_monotonic_while_animating() {
        let v = slide_in_from_left();
        let mut last = -1.0;
        for frame in 0..=60 {
            let p = v.progress(Some(frame as f64 * 16.0));
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_midway_pose_is_between_endpoints() {
        let v = slide_in_from_left();
        let pose = v.sample(Some(400.0));
        let opacity = pose.get(Property::Opacity);
        assert!(opacity > 0.0 && opacity < 1.0);
        assert!(pose.get(Property::X) > -60.0 && pose.get(Property::X) < 0.0);
        assert_eq!(v.phase(Some(400.0)), Phase::Animating);
    }

    #[test]
    fn test_stagger_children_start_in_order() {
        let item = Variants::new(
            Pose::new().opacity(0.0).y(40.0),
            Pose::new().opacity(1.0).y(0.0),
            Transition::new(800.0),
        );
        let stagger = Stagger::new(300.0, 150.0);
        let timeline = Timeline::staggered(&item, stagger, 4);

        for (i, entry) in timeline.entries().iter().enumerate() {
            let start = stagger.delay_for(i);
            assert_eq!(entry.start_ms(), start);
            // nothing moves before d + i*s
            assert_eq!(entry.sample(Some(start)), item.hidden);
            assert_eq!(entry.phase(Some(start + 1.0)), Phase::Animating);
        }
        for pair in timeline.entries().windows(2) {
            assert!(pair[0].start_ms() <= pair[1].start_ms());
        }
        assert_eq!(timeline.end_ms(), 300.0 + 3.0 * 150.0 + 800.0);
    }

    #[test]
    fn test_unset_properties_read_as_identity() {
        let pose = Pose::new().opacity(0.5);
        assert_eq!(pose.get(Property::Scale), 1.0);
        assert_eq!(pose.get(Property::Y), 0.0);
        assert_eq!(pose.to_style(), "opacity: 0.5000;");
    }

    #[test]
    fn test_style_includes_transform_only_when_needed() {
        let style = Pose::new().opacity(0.0).y(30.0).scale(0.9).to_style();
        assert_eq!(
            style,
            "opacity: 0.0000; transform: translate(0.00px, 30.00px) scale(0.9000);"
        );
    }
}
