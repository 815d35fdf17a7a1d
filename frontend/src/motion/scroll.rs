//! Scroll-position math: section progress for parallax layers, the navbar
//! threshold, and the once-per-frame guard for scroll handlers.

/// A point where an edge of the target meets an edge of the viewport.
/// `0.0` is the top (start) edge, `1.0` the bottom (end) edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub target: f64,
    pub viewport: f64,
}

/// Scroll span over which progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: Offset,
    pub end: Offset,
}

impl ScrollRange {
    /// From the target's top touching the viewport bottom to the target's
    /// bottom touching the viewport top.
    pub const ENTER_TO_EXIT: Self = Self {
        start: Offset {
            target: 0.0,
            viewport: 1.0,
        },
        end: Offset {
            target: 1.0,
            viewport: 0.0,
        },
    };

    /// Progress in [0, 1] for the target's current bounding box
    /// (`rect_top` relative to the viewport top).
    pub fn progress(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
        let start = rect_top + self.start.target * rect_height - self.start.viewport * viewport_height;
        let end = rect_top + self.end.target * rect_height - self.end.viewport * viewport_height;
        let span = start - end;
        if span.abs() < f64::EPSILON {
            return if start <= 0.0 { 1.0 } else { 0.0 };
        }
        (start / span).clamp(0.0, 1.0)
    }
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::ENTER_TO_EXIT
    }
}

/// Linear map of `value` from `from` onto `to`, clamped to the input range.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span.abs() < f64::EPSILON {
        return to.0;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Navbar switches to its compact style once the page has scrolled this far.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y >= threshold
}

/// `is_scrolled` state that only reports crossings, so a listener can skip
/// work for scroll frames that leave the style as it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrolledFlag {
    threshold: f64,
    scrolled: bool,
}

impl ScrolledFlag {
    pub fn new(threshold: f64, scroll_y: f64) -> Self {
        Self {
            threshold,
            scrolled: is_scrolled(scroll_y, threshold),
        }
    }

    pub fn get(&self) -> bool {
        self.scrolled
    }

    /// Returns the new value if `scroll_y` moved across the threshold.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = is_scrolled(scroll_y, self.threshold);
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

/// "Already scheduled" flag that lets a burst of scroll events share one
/// animation frame.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    scheduled: bool,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the caller should request a frame now.
    pub fn request(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called from the frame callback before doing the work.
    pub fn fire(&mut self) {
        self.scheduled = false;
    }

    #[cfg(test)]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const HEIGHT: f64 = 400.0;

    /// Section sits at document offset 2000; its viewport top for a scroll offset.
    fn rect_top(scroll_y: f64) -> f64 {
        2000.0 - scroll_y
    }

    #[test]
    fn test_enter_to_exit_bounds() {
        let range = ScrollRange::ENTER_TO_EXIT;
        // top edge just reaching the viewport bottom
        assert_eq!(range.progress(VIEWPORT, HEIGHT, VIEWPORT), 0.0);
        // bottom edge just leaving the viewport top
        assert_eq!(range.progress(-HEIGHT, HEIGHT, VIEWPORT), 1.0);
        // halfway through the span
        let mid = range.progress(VIEWPORT - (VIEWPORT + HEIGHT) / 2.0, HEIGHT, VIEWPORT);
        assert!((mid - 0.5).abs() < 1e-9);
        // far away on either side clamps
        assert_eq!(range.progress(5_000.0, HEIGHT, VIEWPORT), 0.0);
        assert_eq!(range.progress(-5_000.0, HEIGHT, VIEWPORT), 1.0);
    }

    #[test]
    fn test_parallax_retraces_when_scrolling_back() {
        let range = ScrollRange::ENTER_TO_EXIT;
        let offset_at = |scroll_y: f64| {
            let p = range.progress(rect_top(scroll_y), HEIGHT, VIEWPORT);
            map_range(p, (0.0, 1.0), (0.0, 30.0))
        };

        let down: Vec<f64> = (0..=40).map(|i| offset_at(1000.0 + i as f64 * 40.0)).collect();
        let up: Vec<f64> = (0..=40).rev().map(|i| offset_at(1000.0 + i as f64 * 40.0)).collect();
        let mut up_reversed = up.clone();
        up_reversed.reverse();
        assert_eq!(down, up_reversed);

        for pair in down.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(*down.first().unwrap(), 0.0);
        assert_eq!(*down.last().unwrap(), 30.0);
    }

    #[test]
    fn test_map_range_clamps() {
        assert_eq!(map_range(0.5, (0.0, 1.0), (0.0, 30.0)), 15.0);
        assert_eq!(map_range(2.0, (0.0, 1.0), (0.0, 30.0)), 30.0);
        assert_eq!(map_range(-1.0, (0.0, 1.0), (10.0, 20.0)), 10.0);
        assert_eq!(map_range(3.0, (3.0, 3.0), (10.0, 20.0)), 10.0);
    }

    #[test]
    fn test_navbar_threshold_boundary() {
        let threshold = 100.0;
        assert!(!is_scrolled(threshold - 1.0, threshold));
        assert!(is_scrolled(threshold, threshold));
        assert!(is_scrolled(threshold + 250.0, threshold));
        assert!(!is_scrolled(0.0, threshold));
    }

    #[test]
    fn test_flag_reports_only_threshold_crossings() {
        let mut flag = ScrolledFlag::new(100.0, 0.0);
        assert!(!flag.get());

        let down = (0..=300).map(|y| y as f64);
        let up = (0..=300).rev().map(|y| y as f64);
        let changes: Vec<bool> = down.chain(up).filter_map(|y| flag.update(y)).collect();
        assert_eq!(changes, vec![true, false]);
        assert!(!flag.get());

        let flag = ScrolledFlag::new(100.0, 450.0);
        assert!(flag.get());
    }

    #[test]
    fn test_progress_is_constant_away_from_the_section() {
        let range = ScrollRange::ENTER_TO_EXIT;
        let before: Vec<f64> = (0..50).map(|i| range.progress(2_000.0 + i as f64 * 10.0, HEIGHT, VIEWPORT)).collect();
        let after: Vec<f64> = (0..50).map(|i| range.progress(-1_000.0 - i as f64 * 10.0, HEIGHT, VIEWPORT)).collect();
        assert!(before.iter().all(|&p| p == 0.0));
        assert!(after.iter().all(|&p| p == 1.0));
    }

    #[test]
    fn test_coalescer_allows_one_frame_per_burst() {
        let mut frames = FrameCoalescer::new();
        let requested = (0..25).filter(|_| frames.request()).count();
        assert_eq!(requested, 1);
        assert!(frames.is_scheduled());

        frames.fire();
        assert!(!frames.is_scheduled());
        assert!(frames.request());
    }
}
