//! Eleoro Page Behaviors
//!
//! Layout and scroll-synchronization logic behind the eleoro marketing site.
//! Every routine here is a pure function of measured geometry: the browser
//! layer (`eleoro-wasm`) measures the live page, hands the numbers to this
//! crate and applies whatever comes back.
//!
//! # Behaviors
//!
//! - **Radial layout**: satellite nodes placed on a circle around a hub,
//!   each at its declared angle (0° at the top, clockwise).
//! - **Edge-proximity scroll**: pointer position over the roadmap mapped to a
//!   horizontal scroll offset, with dead zones at both edges.
//! - **Step synchronization**: scroll ratio (wide layout) or a viewport
//!   threshold scan (narrow layout) mapped to the active roadmap step.
//! - **Reveal**: one-shot bookkeeping for elements that animate in the first
//!   time they become visible.
//! - **Ticker**: Fisher–Yates shuffled phrase strip with injected randomness.
//!
//! # Dispatch
//!
//! [`DispatchTable`] maps each [`EventKind`] to stateless handlers. A handler
//! reads a [`PageGeometry`] and returns [`Effect`]s, so the whole pipeline can
//! be driven with synthetic geometry in tests.
//!
//! All state is transient. Nothing is cached between calls, which makes every
//! handler idempotent and safe to run redundantly.

pub mod config;
pub mod dispatch;
pub mod edge_scroll;
pub mod error;
pub mod geometry;
pub mod page_state;
pub mod radial;
pub mod reveal;
pub mod steps;
pub mod ticker;

pub use config::{HubConfig, NavConfig, PageConfig, RevealConfig, RoadmapConfig, Selectors, TickerConfig};
pub use dispatch::{DispatchTable, Effect, EventKind, Handler, PageEvent, PageGeometry, Target};
pub use edge_scroll::{target_ratio, target_scroll_left, EdgeZones};
pub use error::{Error, Result};
pub use geometry::{clamp_unit, Point, Rect, ScrollMetrics, Viewport};
pub use page_state::{dropdown_intercepts, nav_scrolled, year_text, Display, FaqState, MenuState};
pub use radial::{layout, node_center, parse_angle, place_node, radius_for, Placement, RadialNode};
pub use reveal::{RevealAction, RevealTracker};
pub use steps::{LayoutMode, StepSync};
pub use ticker::{sequence, shuffle};

/// Class toggled on state-bearing elements (dots, revealed sections, menus).
pub const ACTIVE_CLASS: &str = "active";

/// Class added to the navigation bar once the page has scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class toggled on the burger icon and link list while the mobile menu is open.
pub const OPEN_CLASS: &str = "open";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_classes_are_distinct() {
        assert_ne!(ACTIVE_CLASS, SCROLLED_CLASS);
        assert_ne!(ACTIVE_CLASS, OPEN_CLASS);
        assert_ne!(SCROLLED_CLASS, OPEN_CLASS);
    }
}
