//! Applies dispatch effects to the page. This is the only place the
//! geometry-driven behaviors mutate the DOM.

use crate::dom::{self, PageElements};
use crate::error::Result;
use eleoro_behavior::{Effect, Target};
use web_sys::Element;

fn resolve<'a>(elements: &'a PageElements, target: Target) -> Option<&'a Element> {
    match target {
        Target::Nav => elements.nav.as_ref(),
        Target::Roadmap => elements.roadmap.as_ref(),
        Target::Dot(index) => elements.dots.get(index),
        Target::HubNode(index) => elements.hub_nodes.get(index),
    }
}

fn apply_one(elements: &PageElements, effect: &Effect) -> Result<()> {
    match *effect {
        Effect::SetClass { target, class, present } => {
            if let Some(element) = resolve(elements, target) {
                dom::set_class(element, class, present)?;
            }
        }
        Effect::SetScrollLeft { target, value } => {
            if let Some(element) = resolve(elements, target) {
                dom::set_scroll_left(element, value)?;
            }
        }
        Effect::Place { target, placement } => {
            if let Some(element) = resolve(elements, target) {
                dom::set_style(element, "left", &format!("{}px", placement.left))?;
                dom::set_style(element, "top", &format!("{}px", placement.top))?;
            }
        }
    }
    Ok(())
}

/// Apply every effect; a failing one is logged and the rest still run.
pub fn apply(elements: &PageElements, effects: &[Effect]) {
    for effect in effects {
        if let Err(err) = apply_one(elements, effect) {
            tracing::debug!(%err, ?effect, "effect not applied");
        }
    }
}
