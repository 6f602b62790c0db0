//! DOM access: defensive lookups, listeners, and live geometry.

use crate::error::Result;
use eleoro_behavior::{PageConfig, PageGeometry, RadialNode, Rect, ScrollMetrics, Viewport};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Element, Event, EventTarget, HtmlElement, NodeList, Window};

/// Selector lookups that return nothing instead of throwing.
pub trait Query {
    fn query(&self, selector: &str) -> Option<Element>;
    fn query_all(&self, selector: &str) -> Vec<Element>;
}

impl Query for Document {
    fn query(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.query_selector_all(selector).map(elements).unwrap_or_default()
    }
}

impl Query for Element {
    fn query(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.query_selector_all(selector).map(elements).unwrap_or_default()
    }
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page; nothing ever removes them
    closure.forget();
    Ok(())
}

pub fn set_class(element: &Element, class: &str, present: bool) -> Result<()> {
    element.class_list().toggle_with_force(class, present)?;
    Ok(())
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn style_property(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn set_scroll_left(element: &Element, value: f64) -> Result<()> {
    js_sys::Reflect::set(element, &"scrollLeft".into(), &value.into())?;
    Ok(())
}

pub fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn viewport_height(window: &Window) -> f64 {
    window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn to_rect(rect: DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Elements the geometry-driven behaviors read and write. Looked up once;
/// their geometry is measured fresh on every event.
#[derive(Debug, Default)]
pub struct PageElements {
    pub nav: Option<Element>,
    pub roadmap: Option<Element>,
    pub steps: Vec<Element>,
    pub dots: Vec<Element>,
    pub hub: Option<Element>,
    pub hub_nodes: Vec<Element>,
}

impl PageElements {
    pub fn collect(document: &Document, config: &PageConfig) -> Self {
        let selectors = &config.selectors;
        let hub = document.query(&selectors.hub);
        let hub_nodes = hub
            .as_ref()
            .map(|hub| hub.query_all(&selectors.hub_node))
            .unwrap_or_default();

        Self {
            nav: document.query(&selectors.nav),
            roadmap: document.query(&selectors.roadmap),
            steps: document.query_all(&selectors.roadmap_step),
            dots: document.query_all(&selectors.progress_dot),
            hub,
            hub_nodes,
        }
    }
}

/// [`PageGeometry`] over the live document.
pub struct DomGeometry {
    window: Window,
    elements: Rc<PageElements>,
    angle_attribute: String,
}

impl DomGeometry {
    pub fn new(window: Window, elements: Rc<PageElements>, config: &PageConfig) -> Self {
        Self {
            window,
            elements,
            angle_attribute: config.hub.angle_attribute.clone(),
        }
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    fn measure_node(&self, node: &Element) -> Option<RadialNode> {
        let raw = node.get_attribute(&self.angle_attribute)?;
        let html = node.dyn_ref::<HtmlElement>()?;
        let width = f64::from(html.offset_width());
        let height = f64::from(html.offset_height());
        match RadialNode::from_attribute(&raw, width, height) {
            Ok(measured) => Some(measured),
            Err(err) => {
                tracing::debug!(%err, "hub node skipped");
                None
            }
        }
    }
}

impl PageGeometry for DomGeometry {
    fn viewport(&self) -> Viewport {
        Viewport::new(viewport_width(&self.window), viewport_height(&self.window))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn roadmap_rect(&self) -> Option<Rect> {
        self.elements
            .roadmap
            .as_ref()
            .map(|roadmap| to_rect(roadmap.get_bounding_client_rect()))
    }

    fn roadmap_scroll(&self) -> Option<ScrollMetrics> {
        self.elements.roadmap.as_ref().map(|roadmap| {
            ScrollMetrics::new(
                roadmap.scroll_left() as f64,
                roadmap.scroll_width() as f64,
                roadmap.client_width() as f64,
            )
        })
    }

    fn step_tops(&self) -> Vec<f64> {
        self.elements
            .steps
            .iter()
            .map(|step| step.get_bounding_client_rect().top())
            .collect()
    }

    fn dot_count(&self) -> usize {
        self.elements.dots.len()
    }

    fn hub_rect(&self) -> Option<Rect> {
        self.elements
            .hub
            .as_ref()
            .map(|hub| to_rect(hub.get_bounding_client_rect()))
    }

    fn hub_nodes(&self) -> Vec<Option<RadialNode>> {
        self.elements
            .hub_nodes
            .iter()
            .map(|node| self.measure_node(node))
            .collect()
    }
}
