//! Visibility gate for entrance effects.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Pending,
    Triggered,
}

/// One-shot latch fed by raw intersection notifications. Once triggered it
/// ignores everything after, so leaving and re-entering the viewport never
/// replays an entrance.
#[derive(Clone, Debug, Default)]
pub struct VisibilityGate {
    state: GateState,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state == GateState::Triggered
    }

    /// Feeds one intersection change. Returns true if the gate just latched.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.is_triggered() || !intersecting {
            return false;
        }
        self.state = GateState::Triggered;
        true
    }
}

/// Grows (positive) or shrinks (negative) the viewport on every side before
/// testing intersection, like an IntersectionObserver root margin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin(pub f64);

impl RootMargin {
    /// CSS form accepted by `IntersectionObserverInit.rootMargin`.
    pub fn to_css(&self) -> String {
        format!("{}px", self.0)
    }
}

/// Axis-aligned box in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Whether this box overlaps a `viewport_width` x `viewport_height`
    /// viewport adjusted by `margin`.
    pub fn intersects_viewport(&self, viewport_width: f64, viewport_height: f64, margin: RootMargin) -> bool {
        let m = margin.0;
        let (v_top, v_left) = (-m, -m);
        let (v_bottom, v_right) = (viewport_height + m, viewport_width + m);
        if v_bottom <= v_top || v_right <= v_left {
            return false;
        }
        self.top < v_bottom && self.bottom() > v_top && self.left < v_right && self.right() > v_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_latches_once() {
        let mut gate = VisibilityGate::new();
        assert!(!gate.observe(false));
        assert_eq!(gate.state(), GateState::Pending);
        assert!(gate.observe(true));
        assert!(gate.is_triggered());

        // leaves and re-enters the viewport
        assert!(!gate.observe(false));
        assert!(gate.is_triggered());
        assert!(!gate.observe(true));
        assert_eq!(gate.state(), GateState::Triggered);
    }

    #[test]
    fn test_negative_margin_requires_content_inside_viewport() {
        let margin = RootMargin(-100.0);
        // 50px of the section peeks in above the fold
        let peeking = Rect::new(750.0, 0.0, 1200.0, 600.0);
        assert!(!peeking.intersects_viewport(1200.0, 800.0, margin));
        assert!(peeking.intersects_viewport(1200.0, 800.0, RootMargin(0.0)));

        let inside = Rect::new(650.0, 0.0, 1200.0, 600.0);
        assert!(inside.intersects_viewport(1200.0, 800.0, margin));
    }

    #[test]
    fn test_positive_margin_triggers_early() {
        let below = Rect::new(850.0, 0.0, 1200.0, 300.0);
        assert!(!below.intersects_viewport(1200.0, 800.0, RootMargin(0.0)));
        assert!(below.intersects_viewport(1200.0, 800.0, RootMargin(100.0)));
    }

    #[test]
    fn test_margin_css() {
        assert_eq!(RootMargin(-100.0).to_css(), "-100px");
    }
}
