//! Edge-proximity auto-scroll.
//!
//! Hovering over the roadmap scrolls it without a visible scrollbar. The
//! container is split into three horizontal zones:
//!
//! ```text
//! 0 ────── start ──────────── end ────── 1
//! │ scroll  │   linear map    │  scroll  │
//! │ to 0    │   onto [0, 1]   │  to end  │
//! ```
//!
//! The result depends only on the current pointer position, so running it on
//! every pointer move (or throttled) ends in the same state.

use crate::geometry::{clamp_unit, ScrollMetrics};
use serde::{Deserialize, Serialize};

/// Boundaries of the middle zone, as fractions of container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeZones {
    pub start: f64,
    pub end: f64,
}

impl EdgeZones {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Width of the interpolated middle zone.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

impl Default for EdgeZones {
    fn default() -> Self {
        Self::new(0.3, 0.7)
    }
}

/// Map a horizontal pointer ratio to a target scroll ratio.
pub fn target_ratio(ratio: f64, zones: &EdgeZones) -> f64 {
    if ratio < zones.start {
        0.0
    } else if ratio > zones.end {
        1.0
    } else {
        clamp_unit((ratio - zones.start) / zones.span())
    }
}

/// Scroll offset for a pointer at `pointer_x` (relative to the container's
/// left edge). `None` when the content fits or the container has no width.
pub fn target_scroll_left(
    pointer_x: f64,
    container_width: f64,
    metrics: &ScrollMetrics,
    zones: &EdgeZones,
) -> Option<f64> {
    let max_scroll = metrics.max_scroll();
    if max_scroll <= 0.0 || container_width <= 0.0 {
        return None;
    }
    let ratio = pointer_x / container_width;
    Some(target_ratio(ratio, zones) * max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn metrics(max_scroll: f64) -> ScrollMetrics {
        ScrollMetrics::new(0.0, 1000.0 + max_scroll, 1000.0)
    }

    #[test]
    fn midpoint_scrolls_halfway() {
        let zones = EdgeZones::default();
        assert!((target_ratio(0.5, &zones) - 0.5).abs() < 1e-12);
        let target = target_scroll_left(500.0, 1000.0, &metrics(800.0), &zones).unwrap();
        assert!((target - 400.0).abs() < 1e-9);
    }

    #[test]
    fn zone_boundaries() {
        let zones = EdgeZones::default();
        assert_eq!(target_ratio(0.0, &zones), 0.0);
        assert_eq!(target_ratio(0.3, &zones), 0.0);
        assert!((target_ratio(0.7, &zones) - 1.0).abs() < 1e-12);
        assert_eq!(target_ratio(1.0, &zones), 1.0);
    }

    #[test]
    fn fitting_content_is_a_no_op() {
        let zones = EdgeZones::default();
        let fits = ScrollMetrics::new(0.0, 1000.0, 1000.0);
        assert_eq!(target_scroll_left(900.0, 1000.0, &fits, &zones), None);

        let narrower = ScrollMetrics::new(0.0, 600.0, 1000.0);
        assert_eq!(target_scroll_left(900.0, 1000.0, &narrower, &zones), None);
    }

    #[test]
    fn zero_width_container_is_a_no_op() {
        let zones = EdgeZones::default();
        assert_eq!(target_scroll_left(0.0, 0.0, &metrics(500.0), &zones), None);
    }

    #[test]
    fn pointer_outside_container_saturates() {
        let zones = EdgeZones::default();
        assert_eq!(target_scroll_left(-40.0, 1000.0, &metrics(500.0), &zones), Some(0.0));
        assert_eq!(target_scroll_left(1040.0, 1000.0, &metrics(500.0), &zones), Some(500.0));
    }

    proptest! {
        #[test]
        fn left_zone_scrolls_to_start(ratio in 0.0f64..=0.3, max in 1.0f64..10_000.0) {
            let zones = EdgeZones::default();
            let target = target_scroll_left(ratio * 1000.0, 1000.0, &metrics(max), &zones).unwrap();
            prop_assert!(target.abs() < 1e-9 * max);
        }

        #[test]
        fn right_zone_scrolls_to_end(ratio in 0.7f64..=1.0, max in 1.0f64..10_000.0) {
            let zones = EdgeZones::default();
            let target = target_scroll_left(ratio * 1000.0, 1000.0, &metrics(max), &zones).unwrap();
            prop_assert!((target - max).abs() < 1e-9 * max);
        }

        #[test]
        fn middle_zone_is_monotonic(a in 0.3f64..0.7, b in 0.3f64..0.7) {
            let zones = EdgeZones::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(target_ratio(lo, &zones) <= target_ratio(hi, &zones));
        }

        #[test]
        fn target_always_in_range(pointer in -500.0f64..1500.0, max in 1.0f64..10_000.0) {
            let zones = EdgeZones::default();
            let metrics = metrics(max);
            let target = target_scroll_left(pointer, 1000.0, &metrics, &zones).unwrap();
            prop_assert!((0.0..=metrics.max_scroll()).contains(&target));
        }
    }
}
