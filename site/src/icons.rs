//! Font Awesome glyph markup used by the shell.

/// Mobile toggle while the panel is closed.
pub const MENU: &str = r#"<i class="fas fa-bars"></i>"#;

/// Mobile toggle while the panel is open.
pub const CLOSE: &str = r#"<i class="fas fa-times"></i>"#;

/// Copy button at rest.
pub const COPY: &str = r#"<i class="fas fa-copy"></i>"#;

/// Copy button after a successful copy.
pub const COPIED: &str = r#"<i class="fas fa-check"></i>"#;
