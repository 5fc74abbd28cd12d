//! Window-level listeners: anchor interception, outside clicks, scroll-spy and
//! debounced resize.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use docsite::{Debouncer, NavPanel, SiteConfig};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::state::NavState;

/// Numeric knobs the listeners need, copied out of [`SiteConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Behavior {
    /// Gap left above an anchor target, px
    pub anchor_offset: f64,
    /// Scroll-spy threshold, px
    pub scroll_spy_offset: f64,
    /// Quiet period before a resize burst is handled
    pub resize_debounce: Duration,
}

impl From<&SiteConfig> for Behavior {
    fn from(config: &SiteConfig) -> Self {
        Self {
            anchor_offset: config.anchor_offset,
            scroll_spy_offset: config.scroll_spy_offset,
            resize_debounce: config.resize_debounce(),
        }
    }
}

/// Register the listeners for the lifetime of the page.
pub fn install(nav: NavState, behavior: Behavior) {
    let _ = window_event_listener(ev::click, move |event: web_sys::MouseEvent| {
        let Some(target) = event.target() else {
            return;
        };
        let width = dom::viewport_width().unwrap_or(f64::INFINITY);
        if handle_click(nav, behavior, &target, width) {
            event.prevent_default();
        }
    });

    let _ = window_event_listener(ev::scroll, move |_| {
        nav.sync_scroll_spy(behavior.scroll_spy_offset);
    });

    let debounce = ResizeDebounce::default();
    let _ = window_event_listener(ev::resize, move |_| {
        debounce.on_resize(nav, behavior.resize_debounce, dom::viewport_width);
    });

    // initial highlight once the shell is in the DOM
    Effect::new(move || nav.sync_scroll_spy(behavior.scroll_spy_offset));
}

/// React to a click on `target` with the viewport `width` px wide.
///
/// Returns true when the browser's default action must be suppressed, which
/// is the case for every in-page anchor, including `#` and dangling ones.
pub fn handle_click(
    nav: NavState,
    behavior: Behavior,
    target: &web_sys::EventTarget,
    width: f64,
) -> bool {
    if let Some(element) = target.dyn_ref::<web_sys::Element>() {
        if let Ok(Some(anchor)) = element.closest("a[href^='#']") {
            follow_anchor(nav, behavior, &anchor, width);
            return true;
        }
    }

    let Some(node) = target.dyn_ref::<web_sys::Node>() else {
        return false;
    };
    if !nav.contains(node) && nav.rules.closes_on_outside_click(nav.open.get_untracked(), width)
    {
        nav.close_panel();
    }
    false
}

/// Scroll to the anchor's target, mark its link and close the mobile panel.
/// Does nothing when the target does not exist.
fn follow_anchor(nav: NavState, behavior: Behavior, anchor: &web_sys::Element, width: f64) {
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let id = href.trim_start_matches('#');
    if id.is_empty() {
        return;
    }
    let Some(target) = document().get_element_by_id(id) else {
        tracing::debug!(id, "anchor target not found");
        return;
    };

    let top = NavPanel::scroll_target(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(),
        behavior.anchor_offset,
    );
    dom::smooth_scroll_to(top);
    nav.set_active(Some(id.to_string()));

    if nav.rules.closes_on_navigate(width) {
        nav.close_panel();
    }
}

/// Trailing-edge resize handling: only the last event of a burst is acted on.
#[derive(Clone, Default)]
pub struct ResizeDebounce {
    pending: Rc<Cell<Debouncer>>,
}

impl ResizeDebounce {
    /// Schedule a close check `delay` from now, superseding earlier ones.
    /// `viewport_width` is read only by the check that survives.
    pub fn on_resize(
        &self,
        nav: NavState,
        delay: Duration,
        viewport_width: impl Fn() -> Option<f64> + 'static,
    ) {
        let mut debounce = self.pending.get();
        let ticket = debounce.issue();
        self.pending.set(debounce);

        let pending = self.pending.clone();
        set_timeout(
            move || {
                if !pending.get().is_current(ticket) {
                    return;
                }
                if viewport_width().is_some_and(|w| nav.rules.closes_on_resize(w)) {
                    nav.close_panel();
                }
            },
            delay,
        );
    }
}
