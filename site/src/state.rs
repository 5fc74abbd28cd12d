//! Reactive navigation state shared by the shell components and the window
//! listeners.

use docsite::NavPanel;
use docsite::scroll_spy::active_section;
use leptos::html;
use leptos::prelude::*;

use crate::dom;

/// Panel visibility, active link and the element handles needed for
/// outside-click detection. `Copy`, so every closure can own one.
#[derive(Clone, Copy)]
pub struct NavState {
    /// Mobile panel is open
    pub open: RwSignal<bool>,
    /// Section id whose navigation link is highlighted
    pub active: RwSignal<Option<String>>,
    /// The navigation panel element
    pub panel: NodeRef<html::Nav>,
    /// The mobile toggle button
    pub toggle: NodeRef<html::Button>,
    /// Open/close rules
    pub rules: NavPanel,
}

impl NavState {
    /// Fresh state: panel closed, nothing active.
    pub fn new(rules: NavPanel) -> Self {
        Self {
            open: RwSignal::new(false),
            active: RwSignal::new(None),
            panel: NodeRef::new(),
            toggle: NodeRef::new(),
            rules,
        }
    }

    /// Flip the mobile panel open/closed.
    pub fn toggle_panel(&self) {
        self.open.update(|open| *open = !*open);
    }

    /// Close the mobile panel if it is open.
    pub fn close_panel(&self) {
        if self.open.get_untracked() {
            self.open.set(false);
        }
    }

    /// Make `id` the only active navigation link.
    pub fn set_active(&self, id: Option<String>) {
        if self.active.with_untracked(|current| *current != id) {
            self.active.set(id);
        }
    }

    /// Recompute the active link from the current scroll position.
    pub fn sync_scroll_spy(&self, threshold: f64) {
        let sections = dom::section_bounds();
        let active = active_section(&sections, dom::scroll_y(), threshold);
        self.set_active(active.filter(|id| !id.is_empty()).map(str::to_string));
    }

    /// True when `target` lies inside the panel or the toggle.
    pub fn contains(&self, target: &web_sys::Node) -> bool {
        let in_panel = self
            .panel
            .get_untracked()
            .is_some_and(|panel| panel.contains(Some(target)));
        let in_toggle = self
            .toggle
            .get_untracked()
            .is_some_and(|toggle| toggle.contains(Some(target)));
        in_panel || in_toggle
    }
}
