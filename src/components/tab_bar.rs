//! Tab bar selecting the mounted panel.

use leptos::prelude::*;

use crate::state::tabs::ActiveTab;

#[component]
pub fn TabBar(active: RwSignal<ActiveTab>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {ActiveTab::ALL
                .into_iter()
                .map(|tab| {
                    let class = move || {
                        if active.get() == tab {
                            format!("tab-bar__tab tab-bar__tab--{} tab-bar__tab--active", tab.key())
                        } else {
                            format!("tab-bar__tab tab-bar__tab--{}", tab.key())
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| active.set(tab)>
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
