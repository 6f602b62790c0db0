//! Measured page geometry.
//!
//! These are snapshots of live layout. They are rebuilt from the page on
//! every event and never cached, since any resize invalidates them.

/// Size of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An element's bounding box, as reported by layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Center point relative to the rectangle's own top-left corner.
    pub fn local_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Horizontal scroll state of a container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    pub const fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// Furthest the container can scroll: `scroll_width - client_width`.
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }

    /// True when the content fits and there is nothing to scroll.
    pub fn fits(&self) -> bool {
        self.max_scroll() <= 0.0
    }

    /// Fractional scroll progress in [0, 1], or `None` if the content fits.
    pub fn scroll_ratio(&self) -> Option<f64> {
        if self.fits() {
            return None;
        }
        Some(clamp_unit(self.scroll_left / self.max_scroll()))
    }
}

/// Clamp a ratio into [0, 1]. NaN maps to 0.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_center_ignores_offset() {
        let rect = Rect::new(100.0, 50.0, 400.0, 200.0);
        assert_eq!(rect.local_center(), Point::new(200.0, 100.0));
    }

    #[test]
    fn max_scroll_and_fit() {
        let scrolling = ScrollMetrics::new(0.0, 1600.0, 1000.0);
        assert_eq!(scrolling.max_scroll(), 600.0);
        assert!(!scrolling.fits());

        let fitting = ScrollMetrics::new(0.0, 800.0, 800.0);
        assert!(fitting.fits());
        assert_eq!(fitting.scroll_ratio(), None);
    }

    #[test]
    fn scroll_ratio_is_clamped() {
        // Overscroll (elastic bounce) can report offsets outside the range
        assert_eq!(ScrollMetrics::new(-20.0, 1600.0, 1000.0).scroll_ratio(), Some(0.0));
        assert_eq!(ScrollMetrics::new(700.0, 1600.0, 1000.0).scroll_ratio(), Some(1.0));
        assert_eq!(ScrollMetrics::new(300.0, 1600.0, 1000.0).scroll_ratio(), Some(0.5));
    }

    #[test]
    fn clamp_unit_handles_nan() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(-3.0), 0.0);
        assert_eq!(clamp_unit(3.0), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn point_distance() {
        assert_eq!(Point::ORIGIN.distance(&Point::new(3.0, 4.0)), 5.0);
    }
}
