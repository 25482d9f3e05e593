//! Navigation Bar Component

use leptos::prelude::*;

use crate::app::Page;

/// Links between the signed-in pages
#[component]
pub fn NavBar(current: Page) -> impl IntoView {
    let link_class = move |page: Page| if page == current { "nav-link active" } else { "nav-link" };

    view! {
        <nav class="nav-bar">
            <a class=link_class(Page::Checklist) href=Page::Checklist.url()>"Checks"</a>
            <a class=link_class(Page::Settings) href=Page::Settings.url()>"Settings"</a>
        </nav>
    }
}
