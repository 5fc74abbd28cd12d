//! Site configuration.
//!
//! Every value has a default matching the stock documentation shell. A page
//! may override any subset through a JSON document; the front-end reads it
//! from a `<script type="application/json" id="docsite-config">` element.

use crate::error::ConfigError;
use crate::nav::NavPanel;
use crate::registry::SectionRegistry;
use serde::Deserialize;
use std::time::Duration;

/// Id of the optional JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "docsite-config";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Id of the element the loaded sections are written into.
    pub container_id: String,
    /// Class of the navigation panel.
    pub nav_panel_class: String,
    /// Selector for code blocks that get a copy button.
    pub code_block_selector: String,
    /// Viewports at or below this width (px) are treated as mobile.
    pub mobile_breakpoint: f64,
    /// Gap (px) left above an anchor target after smooth scrolling.
    pub anchor_offset: f64,
    /// How far (px) before a section's top it becomes the active one.
    pub scroll_spy_offset: f64,
    /// Quiet period before a resize burst is acted on.
    pub resize_debounce_ms: u64,
    /// How long the copy confirmation glyph stays visible.
    pub copy_feedback_ms: u64,
    /// Sections in page order.
    pub sections: SectionRegistry,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            container_id: "content-container".into(),
            nav_panel_class: "sidebar".into(),
            code_block_selector: ".code-block pre".into(),
            mobile_breakpoint: 768.0,
            anchor_offset: 20.0,
            scroll_spy_offset: 100.0,
            resize_debounce_ms: 250,
            copy_feedback_ms: 2000,
            sections: SectionRegistry::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an optional override document, falling back to defaults when it
    /// is absent or invalid.
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.filter(|s| !s.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring site configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Resize debounce window.
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Copy confirmation duration.
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Panel rules derived from this configuration.
    pub fn nav_panel(&self) -> NavPanel {
        NavPanel::new(self.mobile_breakpoint)
    }
}
