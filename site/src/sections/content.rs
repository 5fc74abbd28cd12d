use docsite::{LoadOutcome, SectionLoader, SiteConfig};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dom::{self, ContainerSink};
use crate::fetch::BrowserSource;
use crate::state::NavState;

/// Container the section fragments are loaded into, once, after mount.
#[component]
pub fn ContentContainer(config: SiteConfig, nav: NavState) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let started = StoredValue::new(false);
    let container_id = config.container_id.clone();

    Effect::new(move || {
        let Some(element) = container.get() else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let config = config.clone();
        spawn_local(async move {
            load_sections(element.into(), config, nav).await;
        });
    });

    view! {
        <div id=container_id class="content-container" node_ref=container>
            <p class="content-loading">"Loading documentation…"</p>
        </div>
    }
}

async fn load_sections(container: web_sys::Element, config: SiteConfig, nav: NavState) {
    let loader = SectionLoader::new(config.sections.clone(), BrowserSource);
    let sink = ContainerSink::new(container);
    let post_process = || {
        dom::highlight_all();
        dom::attach_copy_buttons(&config.code_block_selector, config.copy_feedback());
        nav.sync_scroll_spy(config.scroll_spy_offset);
    };

    if let LoadOutcome::Rendered { failed, .. } = loader.load_content(&sink, &post_process).await {
        if failed > 0 {
            tracing::warn!(failed, "some sections could not be loaded");
        }
    }
}
