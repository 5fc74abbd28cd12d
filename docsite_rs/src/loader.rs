//! Section loader: fetch every registered fragment concurrently, isolate
//! per-section failures, and assemble the markup in registry order.
//!
//! Two failure tiers:
//! - a failed section is replaced by [`SECTION_ERROR_HTML`] inside its own
//!   `<section>` wrapper and never affects its siblings;
//! - a failed batch (the source refuses to start) replaces the whole
//!   container with [`CONTENT_ERROR_HTML`].

use crate::error::{FetchError, LoadError};
use crate::registry::{SectionEntry, SectionRegistry};
use futures::future::join_all;
use tracing::{debug, error, info};

/// Body rendered for a section whose fragment failed to load.
pub const SECTION_ERROR_HTML: &str = "<p>Error loading section content.</p>";

/// Container content when the whole batch failed.
pub const CONTENT_ERROR_HTML: &str = "<p>Error loading content. Please try again later.</p>";

/// Where section fragments come from.
///
/// Futures returned by implementations need not be `Send`; in the browser they
/// wrap JavaScript promises and run on the single event-loop thread.
#[allow(async_fn_in_trait)]
pub trait SectionSource {
    /// Checked once per batch, before any fetch starts.
    fn ensure_ready(&self) -> Result<(), FetchError> {
        Ok(())
    }

    /// GET `path` and return the body as text. Non-success statuses are errors.
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Receives the assembled markup.
pub trait ContentSink {
    /// Replace the container's content.
    fn replace_content(&self, html: &str);
}

/// Hook run after a successful injection (syntax highlighting, copy buttons).
pub trait PostProcess {
    /// Run the hook.
    fn run(&self);
}

impl<F: Fn()> PostProcess for F {
    fn run(&self) {
        self()
    }
}

/// Result of one section fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Fragment text as served.
    Content(String),
    /// The fetch failed; rendered as the placeholder.
    Failed,
}

/// A fragment tagged with its section key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSection {
    /// Section key
    pub key: String,
    /// Fetched body or failure marker
    pub body: SectionBody,
}

impl LoadedSection {
    /// Wrap the body in its labeled `<section>` element.
    pub fn to_markup(&self) -> String {
        let inner = match &self.body {
            SectionBody::Content(html) => html.as_str(),
            SectionBody::Failed => SECTION_ERROR_HTML,
        };
        format!(r#"<section id="{}">{}</section>"#, self.key, inner)
    }

    /// True when the fragment was fetched.
    pub fn is_loaded(&self) -> bool {
        matches!(self.body, SectionBody::Content(_))
    }
}

/// What [`SectionLoader::load_content`] wrote into the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Sections were injected; `failed` of them show the placeholder.
    Rendered {
        /// Sections with real content
        loaded: usize,
        /// Sections replaced by the placeholder
        failed: usize,
    },
    /// The batch failed and the generic error message was injected.
    Failed,
}

/// Loads the registered sections from a [`SectionSource`].
#[derive(Debug)]
pub struct SectionLoader<S> {
    registry: SectionRegistry,
    source: S,
}

impl<S: SectionSource> SectionLoader<S> {
    /// Loader over an explicit registry and source.
    pub fn new(registry: SectionRegistry, source: S) -> Self {
        Self { registry, source }
    }

    /// The registry this loader was built with.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// The source fragments are fetched from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch all sections concurrently and return them in registry order.
    pub async fn fetch_sections(&self) -> Result<Vec<LoadedSection>, LoadError> {
        self.source
            .ensure_ready()
            .map_err(LoadError::SourceUnavailable)?;

        debug!(sections = self.registry.len(), "fetching sections");
        let tasks = self.registry.iter().map(|entry| self.load_section(entry));
        Ok(join_all(tasks).await)
    }

    /// Fetch all sections and join their markup with newlines.
    pub async fn load_all_sections(&self) -> Result<String, LoadError> {
        let sections = self.fetch_sections().await?;
        Ok(render(&sections))
    }

    /// Load everything into `sink`, then run `post` on success.
    ///
    /// The sink is written exactly once per call.
    pub async fn load_content(
        &self,
        sink: &impl ContentSink,
        post: &impl PostProcess,
    ) -> LoadOutcome {
        match self.fetch_sections().await {
            Ok(sections) => {
                let loaded = sections.iter().filter(|s| s.is_loaded()).count();
                let failed = sections.len() - loaded;
                sink.replace_content(&render(&sections));
                post.run();
                info!(loaded, failed, "content loaded");
                LoadOutcome::Rendered { loaded, failed }
            }
            Err(e) => {
                error!(error = %e, "Error loading content");
                sink.replace_content(CONTENT_ERROR_HTML);
                LoadOutcome::Failed
            }
        }
    }

    async fn load_section(&self, entry: &SectionEntry) -> LoadedSection {
        let body = match self.source.fetch_text(&entry.path).await {
            Ok(html) => SectionBody::Content(html),
            Err(e) => {
                error!(section = %entry.key, path = %entry.path, error = %e, "Error loading section");
                SectionBody::Failed
            }
        };
        LoadedSection {
            key: entry.key.clone(),
            body,
        }
    }
}

fn render(sections: &[LoadedSection]) -> String {
    sections
        .iter()
        .map(LoadedSection::to_markup)
        .collect::<Vec<_>>()
        .join("\n")
}
