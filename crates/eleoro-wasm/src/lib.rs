//! Eleoro browser layer
//!
//! Loads as a WebAssembly module on every page of the site. Once the document
//! is parsed it reads the optional page configuration, installs console
//! logging and wires each behavior independently. A missing element disables
//! only the behavior that needs it; nothing here ever throws into the page.

mod behaviors;
mod dom;
mod effects;
mod error;
mod logging;
mod random;

pub use error::{Error, Result};
pub use logging::{ConsoleMakeWriter, ConsoleMethod};
pub use random::MathRandom;

use dom::{listen, Query};
use eleoro_behavior::PageConfig;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "eleoro-config";

/// Module entry point: initialize now, or as soon as the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        init();
        return;
    }

    let done = Rc::new(Cell::new(false));
    let wired = listen(&document, "DOMContentLoaded", move |_| {
        if !done.replace(true) {
            init();
        }
    });
    if wired.is_err() {
        init();
    }
}

/// Wire every behavior against the current document.
pub fn init() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, config_error) = load_config(&document);
    logging::init(&config.log_filter);
    if let Some(err) = config_error {
        tracing::warn!(%err, "ignoring page configuration, using defaults");
    }
    let config = Rc::new(config);

    let results = [
        ("geometry", behaviors::geometry_handlers(&window, &document, config.clone())),
        ("burger_menu", behaviors::burger_menu(&document, &config)),
        ("dropdown", behaviors::dropdown(&window, &document, &config)),
        ("reveal", behaviors::reveal(&document, &config)),
        ("ticker", behaviors::ticker(&document, &config)),
        ("footer_year", behaviors::footer_year(&document, &config)),
        ("faq", behaviors::faq(&document, &config)),
    ];

    let mut active = 0;
    for (behavior, result) in results {
        match result {
            Ok(()) => active += 1,
            Err(err) => tracing::debug!(behavior, %err, "behavior skipped"),
        }
    }
    tracing::info!(active, "page behaviors ready");
}

/// Read overrides from the page. Absence is not an error; a malformed
/// document falls back to defaults and reports why.
fn load_config(document: &Document) -> (PageConfig, Option<Error>) {
    let selector = format!("#{CONFIG_ELEMENT_ID}");
    let Some(text) = document.query(&selector).and_then(|el| el.text_content()) else {
        return (PageConfig::default(), None);
    };
    match PageConfig::from_json(&text) {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err.into())),
    }
}
