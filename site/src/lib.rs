//! Browser front-end for the documentation site.
//!
//! Renders the page shell (mobile toggle, navigation panel, content
//! container), loads the section fragments into the container, and wires the
//! navigation behaviors: smooth anchor scrolling, scroll-spy, outside-click and
//! resize handling, copy buttons on code blocks.
//!
//! Decisions live in the `docsite` crate; this crate only talks to the DOM.

pub mod behaviors;
pub mod dom;
pub mod fetch;
pub mod icons;
pub mod logging;
pub mod sections;
pub mod settings;
pub mod state;

use docsite::SiteConfig;
use leptos::prelude::*;
use sections::*;
use state::NavState;

/// Install the panic hook and logger, read the configuration, mount the app.
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = settings::discover();
    tracing::info!(sections = config.sections.len(), "mounting documentation shell");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let nav = NavState::new(config.nav_panel());
    behaviors::install(nav, behaviors::Behavior::from(&config));

    let sections = config.sections.clone();
    let panel_class = config.nav_panel_class.clone();

    view! {
        <MobileNavToggle nav=nav />
        <Sidebar nav=nav sections=sections panel_class=panel_class />
        <main class="main-content">
            <ContentContainer config=config nav=nav />
        </main>
    }
}
