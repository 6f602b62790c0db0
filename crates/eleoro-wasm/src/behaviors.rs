//! Wiring for each page behavior.
//!
//! Every function here is independent: it looks up what it needs, returns an
//! error if something is missing, and otherwise attaches its listeners.

use crate::dom::{self, listen, DomGeometry, PageElements, Query};
use crate::effects;
use crate::error::Result;
use crate::random::MathRandom;
use eleoro_behavior::{
    dropdown_intercepts, sequence, year_text, DispatchTable, Display, EventKind, FaqState, MenuState, PageConfig,
    PageEvent, RevealAction, RevealTracker, ACTIVE_CLASS, OPEN_CLASS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, Window,
};

/// Where the DOM event behind an [`EventKind`] is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    Window(&'static str),
    Roadmap(&'static str),
    /// Runs once during initialization, no listener.
    Immediate,
}

pub fn event_source(kind: EventKind) -> EventSource {
    match kind {
        EventKind::Ready => EventSource::Immediate,
        EventKind::WindowScroll => EventSource::Window("scroll"),
        EventKind::Resize => EventSource::Window("resize"),
        EventKind::PointerMove => EventSource::Roadmap("mousemove"),
        EventKind::RoadmapScroll => EventSource::Roadmap("scroll"),
    }
}

/// Runs the dispatch table against the live page.
struct Dispatcher {
    table: DispatchTable,
    geometry: DomGeometry,
    config: Rc<PageConfig>,
}

impl Dispatcher {
    fn fire(&self, event: PageEvent) {
        let effects = self.table.dispatch(&event, &self.geometry, &self.config);
        effects::apply(self.geometry.elements(), &effects);
    }
}

/// Geometry-driven behaviors: sticky nav, roadmap auto-scroll, step sync and
/// the radial hub.
pub fn geometry_handlers(window: &Window, document: &Document, config: Rc<PageConfig>) -> Result<()> {
    let elements = Rc::new(PageElements::collect(document, &config));
    let roadmap = elements.roadmap.clone();
    let watch_window_scroll = elements.nav.is_some();
    let dispatcher = Rc::new(Dispatcher {
        table: DispatchTable::standard(),
        geometry: DomGeometry::new(window.clone(), elements, &config),
        config,
    });

    let mut kinds: Vec<EventKind> = dispatcher.table.kinds().collect();
    // Ready last, so listeners exist before the first pass
    kinds.sort_by_key(|kind| *kind == EventKind::Ready);

    for kind in kinds {
        let (target, name) = match event_source(kind) {
            EventSource::Immediate => {
                dispatcher.fire(PageEvent::new(kind));
                continue;
            }
            EventSource::Window(name) => {
                if kind == EventKind::WindowScroll && !watch_window_scroll {
                    continue;
                }
                let target: &EventTarget = window;
                (target, name)
            }
            EventSource::Roadmap(name) => {
                let Some(roadmap) = roadmap.as_ref() else {
                    continue;
                };
                let target: &EventTarget = roadmap;
                (target, name)
            }
        };

        let dispatcher = dispatcher.clone();
        listen(target, name, move |event| {
            let page_event = match event.dyn_ref::<MouseEvent>() {
                Some(mouse) if kind == EventKind::PointerMove => {
                    PageEvent::pointer_move(f64::from(mouse.client_x()), f64::from(mouse.client_y()))
                }
                _ => PageEvent::new(kind),
            };
            dispatcher.fire(page_event);
        })?;
    }
    Ok(())
}

/// Burger icon toggles the mobile menu; following any link closes it.
pub fn burger_menu(document: &Document, config: &PageConfig) -> Result<()> {
    let burger = document.query(&config.selectors.burger).ok_or("burger")?;
    let links = document.query(&config.selectors.nav_links).ok_or("nav links")?;

    let apply = {
        let burger = burger.clone();
        let links = links.clone();
        move |state: MenuState| -> Result<()> {
            dom::set_class(&burger, OPEN_CLASS, state.open)?;
            dom::set_class(&links, OPEN_CLASS, state.open)?;
            Ok(())
        }
    };

    {
        let apply = apply.clone();
        let burger_el = burger.clone();
        listen(&burger, "click", move |_| {
            let state = MenuState {
                open: dom::has_class(&burger_el, OPEN_CLASS),
            };
            if let Err(err) = apply(state.toggle()) {
                tracing::debug!(%err, "menu toggle failed");
            }
        })?;
    }

    for link in links.query_all("a") {
        let apply = apply.clone();
        listen(&link, "click", move |_| {
            if let Err(err) = apply(MenuState::default().close()) {
                tracing::debug!(%err, "menu close failed");
            }
        })?;
    }
    Ok(())
}

/// On narrow viewports a tap on the dropdown toggle opens its mega menu.
pub fn dropdown(window: &Window, document: &Document, config: &PageConfig) -> Result<()> {
    let toggle = document.query(&config.selectors.dropdown_toggle).ok_or("dropdown toggle")?;
    let window = window.clone();
    let breakpoint = config.nav.mobile_breakpoint;
    let toggle_el = toggle.clone();

    listen(&toggle, "click", move |event| {
        if !dropdown_intercepts(dom::viewport_width(&window), breakpoint) {
            return;
        }
        event.prevent_default();
        let Some(menu) = toggle_el.next_element_sibling() else {
            return;
        };
        let next = Display::parse(&dom::style_property(&menu, "display")).toggled();
        if let Err(err) = dom::set_style(&menu, "display", next.as_css()) {
            tracing::debug!(%err, "dropdown toggle failed");
        }
    })
}

/// Sections flagged for reveal animate in once, the first time they show.
pub fn reveal(document: &Document, config: &PageConfig) -> Result<()> {
    let targets = document.query_all(&config.selectors.reveal);
    if targets.is_empty() {
        return Err("reveal targets".into());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::<usize>::new()));
    for index in 0..targets.len() {
        tracker.borrow_mut().observe(index);
    }
    let watched = targets.clone();

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = watched.iter().position(|el| *el == target) else {
                continue;
            };
            let action = tracker.borrow_mut().on_intersection(&index, entry.is_intersecting());
            if action == RevealAction::Activate {
                if let Err(err) = dom::set_class(&target, ACTIVE_CLASS, true) {
                    tracing::debug!(%err, "reveal failed");
                }
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!(count = targets.len(), "reveal targets observed");
    Ok(())
}

/// Fill the ticker with shuffled copies of the phrase list.
pub fn ticker(document: &Document, config: &PageConfig) -> Result<()> {
    let mount = document.query(&config.selectors.ticker).ok_or("ticker mount")?;
    let strip = sequence(&config.ticker.phrases, config.ticker.repetitions, &mut MathRandom);

    mount.set_inner_html("");
    for phrase in strip {
        let item = document.create_element("span")?;
        item.set_class_name("ticker-item");
        item.set_text_content(Some(&phrase));
        mount.append_child(&item)?;
    }
    Ok(())
}

/// Current year in the footer.
pub fn footer_year(document: &Document, config: &PageConfig) -> Result<()> {
    let slot = document.query(&config.selectors.year).ok_or("year placeholder")?;
    let year = js_sys::Date::new_0().get_full_year();
    slot.set_text_content(Some(&year_text(year)));
    Ok(())
}

/// Each FAQ question expands or collapses its answer and flips the glyph.
pub fn faq(document: &Document, config: &PageConfig) -> Result<()> {
    let selectors = &config.selectors;
    let items = document.query_all(&selectors.faq_item);
    if items.is_empty() {
        return Err("faq items".into());
    }

    let mut wired = 0;
    for item in items {
        let (Some(question), Some(answer)) = (item.query(&selectors.faq_question), item.query(&selectors.faq_answer))
        else {
            continue;
        };
        let icon = item.query(&selectors.faq_icon);
        listen(&question, "click", move |_| toggle_faq(&answer, icon.as_ref()))?;
        wired += 1;
    }
    tracing::debug!(wired, "faq entries wired");
    Ok(())
}

fn toggle_faq(answer: &Element, icon: Option<&Element>) {
    let next = FaqState::from_display(&dom::style_property(answer, "display")).toggled();
    if let Err(err) = dom::set_style(answer, "display", next.display().as_css()) {
        tracing::debug!(%err, "faq toggle failed");
        return;
    }
    if let Some(icon) = icon {
        icon.set_text_content(Some(next.glyph()));
    }
}
