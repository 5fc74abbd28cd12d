//! Scroll-spy: which section is "current" for a given scroll position.

/// A section's id and its distance from the top of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    /// Element id
    pub id: String,
    /// `offsetTop` in px
    pub top: f64,
}

impl SectionBounds {
    /// Bounds for `id` starting at `top`.
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the last section (in document order) whose top, less `threshold`,
/// has been scrolled past. `None` when no section qualifies.
///
/// Sections without an id still take part; they can win and yield `Some("")`,
/// which matches no navigation link.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, threshold: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - threshold)
        .map(|s| s.id.as_str())
}
