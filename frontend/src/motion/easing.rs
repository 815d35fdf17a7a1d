//! Easing curves for entrance transitions.
//!
//! Every curve maps the time fraction `t` in [0, 1] to a progress factor
//! with `apply(0.0) == 0.0` and `apply(1.0) == 1.0`. Inputs outside the
//! unit interval are clamped.

/// Easing curve applied to the time fraction of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// CSS `ease-out`: starts fast, ends slow
    EaseOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Curve used by the navbar slide-in.
    pub const NAV_SLIDE: Self = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Easing::EaseOut => cubic_bezier(t, 0.0, 0.0, 0.58, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

/// Solves the curve for `x = t` with Newton-Raphson, falling back to
/// bisection when the slope flattens out.
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let mut s = t;
    let mut solved = false;
    for _ in 0..8 {
        let err = bezier_coord(s, x1, x2) - t;
        if err.abs() < 1e-7 {
            solved = true;
            break;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    if !solved || !(0.0..=1.0).contains(&s) {
        let (mut lo, mut hi) = (0.0, 1.0);
        s = t;
        for _ in 0..40 {
            let x = bezier_coord(s, x1, x2);
            if (x - t).abs() < 1e-7 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
    }

    bezier_coord(s, y1, y2)
}

fn bezier_coord(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASE_IN_OUT: Easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);

    const ALL: [Easing; 4] = [
        Easing::EaseOut,
        Easing::NAV_SLIDE,
        EASE_IN_OUT,
        Easing::CubicBezier(0.68, -0.55, 0.27, 1.55),
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(Easing::EaseOut.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOut.apply(3.0), 1.0);
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::NAV_SLIDE.apply(0.5) > 0.5);
        assert!((EASE_IN_OUT.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_curves_do_not_go_backwards() {
        for easing in [Easing::EaseOut, Easing::NAV_SLIDE, EASE_IN_OUT] {
            let mut last = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f64 / 100.0);
                assert!(v + 1e-9 >= last, "{:?} went backwards at step {}", easing, i);
                last = v;
            }
        }
    }
}
