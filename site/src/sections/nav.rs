use docsite::SectionRegistry;
use leptos::prelude::*;

use crate::icons;
use crate::state::NavState;

/// Hamburger button shown on narrow viewports.
#[component]
pub fn MobileNavToggle(nav: NavState) -> impl IntoView {
    view! {
        <button
            type="button"
            class="mobile-nav-toggle"
            aria-label="Toggle navigation"
            aria-expanded=move || nav.open.get().to_string()
            node_ref=nav.toggle
            on:click=move |_| nav.toggle_panel()
            inner_html=move || if nav.open.get() { icons::CLOSE } else { icons::MENU }
        ></button>
    }
}

/// Navigation panel with one link per registered section.
#[component]
pub fn Sidebar(nav: NavState, sections: SectionRegistry, panel_class: String) -> impl IntoView {
    let links = sections
        .iter()
        .map(|entry| {
            let key = entry.key.clone();
            let is_active = move || nav.active.with(|active| active.as_deref() == Some(key.as_str()));
            view! {
                <li>
                    <a href=entry.anchor() class:active=is_active>
                        {entry.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=panel_class class:active=move || nav.open.get() node_ref=nav.panel>
            <ul class="nav-links">{links}</ul>
        </nav>
    }
}
