//! Locates the page's optional JSON configuration.

use docsite::SiteConfig;
use docsite::config::CONFIG_ELEMENT_ID;

/// Read `<script type="application/json" id="docsite-config">` if present and
/// merge it over the defaults. Invalid documents fall back to defaults.
pub fn discover() -> SiteConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    if json.is_none() {
        tracing::debug!("no #{CONFIG_ELEMENT_ID} element, using default configuration");
    }
    SiteConfig::load_or_default(json.as_deref())
}
