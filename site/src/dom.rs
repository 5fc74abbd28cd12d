//! Thin DOM helpers: measurement, content injection, the highlighter hook and
//! copy buttons.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use docsite::scroll_spy::SectionBounds;
use docsite::{ContentSink, Debouncer};
use leptos::prelude::set_timeout;
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::icons;

/// Marks code blocks that already carry a copy button.
const COPY_MARKER: &str = "data-copy-button";

/// Best-effort string form of a JavaScript exception.
pub fn js_error(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// Vertical scroll offset of the window, 0 when unknown.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Viewport width in px, `None` outside a browser window.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// `(id, offsetTop)` of every `<section>` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBounds::new(el.id(), f64::from(el.offset_top())))
        .collect()
}

/// Smooth-scroll the window to an absolute vertical position.
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Writes loader output into the content container.
pub struct ContainerSink {
    element: web_sys::Element,
}

impl ContainerSink {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

impl ContentSink for ContainerSink {
    fn replace_content(&self, html: &str) {
        self.element.set_inner_html(html);
    }
}

/// Run `Prism.highlightAll()` when Prism is on the page.
///
/// Returns whether the highlighter ran.
pub fn highlight_all() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let prism = match js_sys::Reflect::get(&window, &JsValue::from_str("Prism")) {
        Ok(prism) if !prism.is_undefined() && !prism.is_null() => prism,
        _ => {
            debug!("Prism not present, skipping highlighting");
            return false;
        }
    };
    let Some(highlight) = js_sys::Reflect::get(&prism, &JsValue::from_str("highlightAll"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        warn!("Prism.highlightAll is not a function");
        return false;
    };

    match highlight.call0(&prism) {
        Ok(_) => true,
        Err(e) => {
            error!(error = %js_error(&e), "Prism.highlightAll failed");
            false
        }
    }
}

/// Append a copy button to every block matching `selector` that lacks one.
///
/// Returns the number of buttons added.
pub fn attach_copy_buttons(selector: &str, feedback: Duration) -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let blocks = match document.query_selector_all(selector) {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!(selector, error = %js_error(&e), "invalid code block selector");
            return 0;
        }
    };

    let mut added = 0;
    for block in (0..blocks.length()).filter_map(|i| blocks.get(i)) {
        let Ok(block) = block.dyn_into::<web_sys::Element>() else {
            continue;
        };
        if block.has_attribute(COPY_MARKER) {
            continue;
        }
        match attach_copy_button(&document, &block, feedback) {
            Ok(true) => added += 1,
            Ok(false) => debug!("code block has no parent, skipping copy button"),
            Err(e) => warn!(error = %js_error(&e), "could not attach copy button"),
        }
    }
    debug!(added, "copy buttons attached");
    added
}

/// Give one block its copy button. `Ok(false)` when the block is detached and
/// has no parent to host the button; the block is then left unmarked.
pub fn attach_copy_button(
    document: &web_sys::Document,
    block: &web_sys::Element,
    feedback: Duration,
) -> Result<bool, JsValue> {
    let Some(parent) = block.parent_element() else {
        return Ok(false);
    };

    let button = document.create_element("button")?;
    button.set_class_name("copy-button");
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", "Copy code")?;
    button.set_inner_html(icons::COPY);

    let ticket = Rc::new(Cell::new(Debouncer::default()));
    let on_click = {
        let block = block.clone();
        let button = button.clone();
        Closure::wrap(Box::new(move || {
            let text = code_text(&block);
            let button = button.clone();
            let ticket = ticket.clone();
            spawn_local(async move {
                if let Err(e) = write_clipboard(&text).await {
                    error!(error = %js_error(&e), "clipboard write failed");
                    return;
                }
                button.set_inner_html(icons::COPIED);

                let mut debounce = ticket.get();
                let mine = debounce.issue();
                ticket.set(debounce);
                set_timeout(
                    move || {
                        if ticket.get().is_current(mine) {
                            button.set_inner_html(icons::COPY);
                        }
                    },
                    feedback,
                );
            });
        }) as Box<dyn Fn()>)
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    if let Some(parent) = parent.dyn_ref::<web_sys::HtmlElement>() {
        parent.style().set_property("position", "relative")?;
    }
    parent.append_child(&button)?;
    block.set_attribute(COPY_MARKER, "")?;
    Ok(true)
}

/// Text of the block's `<code>` child, or of the block itself.
pub fn code_text(block: &web_sys::Element) -> String {
    block
        .query_selector("code")
        .ok()
        .flatten()
        .and_then(|code| code.text_content())
        .or_else(|| block.text_content())
        .unwrap_or_default()
}

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}
