// Documentation shell components

mod content;
mod nav;

pub use content::ContentContainer;
pub use nav::{MobileNavToggle, Sidebar};
