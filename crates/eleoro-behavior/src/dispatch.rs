//! Event dispatch.
//!
//! Each geometry-driven behavior is a stateless [`Handler`]: it reads the
//! page through [`PageGeometry`] and returns the [`Effect`]s to apply. The
//! browser layer owns the only mutation boundary, applying effects to real
//! elements; tests inject synthetic geometry and inspect effects directly.

use crate::config::PageConfig;
use crate::edge_scroll::target_scroll_left;
use crate::geometry::{Point, Rect, ScrollMetrics, Viewport};
use crate::page_state::nav_scrolled;
use crate::radial::{layout, Placement, RadialNode};
use crate::steps::{LayoutMode, StepSync};
use crate::{ACTIVE_CLASS, SCROLLED_CLASS};
use std::collections::HashMap;

/// Events the page reacts to with geometry-driven handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Document finished parsing; handlers run once eagerly.
    Ready,
    WindowScroll,
    Resize,
    /// Pointer moved over the roadmap.
    PointerMove,
    /// The roadmap container scrolled horizontally.
    RoadmapScroll,
}

/// An event plus the little payload some handlers need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageEvent {
    pub kind: EventKind,
    /// Pointer position in viewport coordinates, for pointer events.
    pub pointer: Option<Point>,
}

impl PageEvent {
    pub const fn new(kind: EventKind) -> Self {
        Self { kind, pointer: None }
    }

    pub const fn pointer_move(x: f64, y: f64) -> Self {
        Self {
            kind: EventKind::PointerMove,
            pointer: Some(Point::new(x, y)),
        }
    }
}

/// Live measurements of the page. Missing elements read as `None` or empty.
pub trait PageGeometry {
    fn viewport(&self) -> Viewport;

    /// Vertical scroll of the window.
    fn scroll_y(&self) -> f64;

    /// Roadmap bounding box in viewport coordinates.
    fn roadmap_rect(&self) -> Option<Rect>;

    fn roadmap_scroll(&self) -> Option<ScrollMetrics>;

    /// Top edge of each roadmap step in viewport coordinates, in order.
    fn step_tops(&self) -> Vec<f64>;

    fn dot_count(&self) -> usize;

    fn hub_rect(&self) -> Option<Rect>;

    /// One entry per satellite node; `None` where the angle did not parse.
    fn hub_nodes(&self) -> Vec<Option<RadialNode>>;
}

/// Elements an effect can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Nav,
    Roadmap,
    Dot(usize),
    HubNode(usize),
}

/// A single style or class mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    SetClass {
        target: Target,
        class: &'static str,
        present: bool,
    },
    SetScrollLeft {
        target: Target,
        value: f64,
    },
    Place {
        target: Target,
        placement: Placement,
    },
}

/// A stateless behavior.
pub type Handler = fn(&PageEvent, &dyn PageGeometry, &PageConfig) -> Vec<Effect>;

/// Handlers keyed by the event kind that triggers them.
#[derive(Default)]
pub struct DispatchTable {
    handlers: HashMap<EventKind, Vec<(&'static str, Handler)>>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's wiring: sticky nav, roadmap auto-scroll, step sync and the
    /// radial hub.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(EventKind::Ready, "sticky_nav", sticky_nav);
        table.register(EventKind::WindowScroll, "sticky_nav", sticky_nav);
        table.register(EventKind::PointerMove, "edge_scroll", edge_scroll);
        for kind in [EventKind::Ready, EventKind::RoadmapScroll, EventKind::Resize] {
            table.register(kind, "step_sync", step_sync);
        }
        for kind in [EventKind::Ready, EventKind::Resize] {
            table.register(kind, "radial_layout", radial_layout);
        }
        table
    }

    /// Add a handler. Handlers for the same kind run in registration order.
    pub fn register(&mut self, kind: EventKind, name: &'static str, handler: Handler) {
        self.handlers.entry(kind).or_default().push((name, handler));
    }

    /// Names of the handlers registered for `kind`.
    pub fn handler_names(&self, kind: EventKind) -> Vec<&'static str> {
        self.handlers
            .get(&kind)
            .map(|entries| entries.iter().map(|(name, _)| *name).collect())
            .unwrap_or_default()
    }

    /// Kinds with at least one handler; the browser layer only listens for these.
    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.handlers.keys().copied()
    }

    /// Run every handler registered for the event's kind.
    pub fn dispatch(&self, event: &PageEvent, geometry: &dyn PageGeometry, config: &PageConfig) -> Vec<Effect> {
        let Some(entries) = self.handlers.get(&event.kind) else {
            return Vec::new();
        };
        let mut effects = Vec::new();
        for (name, handler) in entries {
            let produced = handler(event, geometry, config);
            tracing::trace!(handler = *name, kind = ?event.kind, effects = produced.len(), "dispatched");
            effects.extend(produced);
        }
        effects
    }
}

/// Mark the navigation bar once the page scrolls past the threshold.
pub fn sticky_nav(_event: &PageEvent, geometry: &dyn PageGeometry, config: &PageConfig) -> Vec<Effect> {
    vec![Effect::SetClass {
        target: Target::Nav,
        class: SCROLLED_CLASS,
        present: nav_scrolled(geometry.scroll_y(), config.nav.scroll_threshold),
    }]
}

/// Scroll the roadmap toward whichever edge the pointer is near.
pub fn edge_scroll(event: &PageEvent, geometry: &dyn PageGeometry, config: &PageConfig) -> Vec<Effect> {
    let (Some(pointer), Some(rect), Some(metrics)) =
        (event.pointer, geometry.roadmap_rect(), geometry.roadmap_scroll())
    else {
        return Vec::new();
    };
    target_scroll_left(pointer.x - rect.left, rect.width, &metrics, &config.roadmap.zones)
        .map(|value| {
            vec![Effect::SetScrollLeft {
                target: Target::Roadmap,
                value,
            }]
        })
        .unwrap_or_default()
}

/// Move the active marker to the step currently in view.
pub fn step_sync(_event: &PageEvent, geometry: &dyn PageGeometry, config: &PageConfig) -> Vec<Effect> {
    let tops = geometry.step_tops();
    let sync = match StepSync::new(tops.len(), geometry.dot_count()) {
        Ok(sync) => sync,
        Err(err) => {
            tracing::trace!(%err, "step sync disabled");
            return Vec::new();
        }
    };

    let viewport = geometry.viewport();
    let mode = LayoutMode::for_viewport(viewport.width, config.roadmap.horizontal_breakpoint);
    let metrics = geometry.roadmap_scroll();
    let Some(active) = sync.resolve(mode, metrics.as_ref(), &tops, &viewport, config.roadmap.activation) else {
        return Vec::new();
    };

    sync.markers(active)
        .map(|(index, present)| Effect::SetClass {
            target: Target::Dot(index),
            class: ACTIVE_CLASS,
            present,
        })
        .collect()
}

/// Place the hub's satellite nodes on their orbit.
pub fn radial_layout(_event: &PageEvent, geometry: &dyn PageGeometry, config: &PageConfig) -> Vec<Effect> {
    let Some(rect) = geometry.hub_rect() else {
        return Vec::new();
    };
    layout(&rect, &geometry.hub_nodes(), config.hub.radius_factor)
        .into_iter()
        .enumerate()
        .filter_map(|(index, placement)| {
            placement.map(|placement| Effect::Place {
                target: Target::HubNode(index),
                placement,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Blank;

    impl PageGeometry for Blank {
        fn viewport(&self) -> Viewport {
            Viewport::new(1280.0, 800.0)
        }
        fn scroll_y(&self) -> f64 {
            120.0
        }
        fn roadmap_rect(&self) -> Option<Rect> {
            None
        }
        fn roadmap_scroll(&self) -> Option<ScrollMetrics> {
            None
        }
        fn step_tops(&self) -> Vec<f64> {
            Vec::new()
        }
        fn dot_count(&self) -> usize {
            0
        }
        fn hub_rect(&self) -> Option<Rect> {
            None
        }
        fn hub_nodes(&self) -> Vec<Option<RadialNode>> {
            Vec::new()
        }
    }

    #[test]
    fn standard_table_wiring() {
        let table = DispatchTable::standard();
        assert_eq!(
            table.handler_names(EventKind::Ready),
            vec!["sticky_nav", "step_sync", "radial_layout"]
        );
        assert_eq!(table.handler_names(EventKind::WindowScroll), vec!["sticky_nav"]);
        assert_eq!(table.handler_names(EventKind::PointerMove), vec!["edge_scroll"]);
        assert_eq!(table.handler_names(EventKind::RoadmapScroll), vec!["step_sync"]);
        assert_eq!(table.handler_names(EventKind::Resize), vec!["step_sync", "radial_layout"]);
        assert_eq!(table.kinds().count(), 5);
    }

    #[test]
    fn missing_elements_yield_only_nav_effect() {
        let table = DispatchTable::standard();
        let effects = table.dispatch(&PageEvent::new(EventKind::Ready), &Blank, &PageConfig::default());
        assert_eq!(
            effects,
            vec![Effect::SetClass {
                target: Target::Nav,
                class: SCROLLED_CLASS,
                present: true,
            }]
        );
    }

    #[test]
    fn pointer_move_without_roadmap_is_inert() {
        let table = DispatchTable::standard();
        let effects = table.dispatch(&PageEvent::pointer_move(300.0, 10.0), &Blank, &PageConfig::default());
        assert!(effects.is_empty());
    }

    #[test]
    fn unregistered_kind_is_empty() {
        let table = DispatchTable::new();
        let effects = table.dispatch(&PageEvent::new(EventKind::Resize), &Blank, &PageConfig::default());
        assert!(effects.is_empty());
    }

    #[test]
    fn custom_handlers_run_in_order() {
        fn first(_: &PageEvent, _: &dyn PageGeometry, _: &PageConfig) -> Vec<Effect> {
            vec![Effect::SetScrollLeft { target: Target::Roadmap, value: 1.0 }]
        }
        fn second(_: &PageEvent, _: &dyn PageGeometry, _: &PageConfig) -> Vec<Effect> {
            vec![Effect::SetScrollLeft { target: Target::Roadmap, value: 2.0 }]
        }

        let mut table = DispatchTable::new();
        table.register(EventKind::Resize, "first", first);
        table.register(EventKind::Resize, "second", second);
        let effects = table.dispatch(&PageEvent::new(EventKind::Resize), &Blank, &PageConfig::default());
        assert_eq!(
            effects,
            vec![
                Effect::SetScrollLeft { target: Target::Roadmap, value: 1.0 },
                Effect::SetScrollLeft { target: Target::Roadmap, value: 2.0 },
            ]
        );
    }
}
