//! # docsite
//!
//! Platform-independent core of the documentation site front-end.
//!
//! The browser crate (`docsite-web`) owns every DOM and network call. This
//! crate owns the decisions: which fragments to load and in what order, how a
//! failed fragment is rendered, which section the scroll position falls in,
//! and when the mobile navigation panel should close.
//!
//! ## Loading sections
//!
//! ```rust
//! use docsite::{FetchError, SectionEntry, SectionLoader, SectionRegistry, SectionSource};
//!
//! struct Static;
//!
//! impl SectionSource for Static {
//!     async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
//!         Ok(format!("<p>{path}</p>"))
//!     }
//! }
//!
//! let registry = SectionRegistry::new(vec![
//!     SectionEntry::new("features", "sections/features.html"),
//! ])
//! .unwrap();
//!
//! let loader = SectionLoader::new(registry, Static);
//! let html = futures::executor::block_on(loader.load_all_sections()).unwrap();
//! assert_eq!(html, r#"<section id="features"><p>sections/features.html</p></section>"#);
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - ordered, validated section registry
//! - [`config`] - site configuration with JSON overrides
//! - [`loader`] - concurrent fetch, per-section isolation, ordered assembly
//! - [`scroll_spy`] - active-section computation
//! - [`nav`] - mobile panel rules and the debounce ticket

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod loader;
pub mod nav;
pub mod registry;
pub mod scroll_spy;

pub use config::SiteConfig;
pub use error::{ConfigError, FetchError, LoadError};
pub use loader::{
    ContentSink, LoadOutcome, LoadedSection, PostProcess, SectionBody, SectionLoader,
    SectionSource, CONTENT_ERROR_HTML, SECTION_ERROR_HTML,
};
pub use nav::{Debouncer, NavPanel, Ticket};
pub use registry::{SectionEntry, SectionRegistry};
pub use scroll_spy::{SectionBounds, active_section};
