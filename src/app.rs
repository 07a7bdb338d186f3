//! Root application component: context providers, bootstrap loads and the
//! tab orchestrator.
//!
//! ARCHITECTURE
//! ============
//! `App` receives the resolved [`DashboardConfig`] from the mount entry and
//! provides it, together with the shared [`BootstrapState`], as context.
//! Exactly one panel is mounted at a time; switching tabs drops the previous
//! panel and all of its form and result state.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::status_header::StatusHeader;
use crate::components::tab_bar::TabBar;
use crate::config::DashboardConfig;
use crate::panels::artist::ArtistPanel;
use crate::panels::charts::ChartsPanel;
use crate::panels::discover::DiscoverPanel;
use crate::panels::genre::GenrePanel;
use crate::panels::mix::MixPanel;
use crate::panels::mood::MoodPanel;
use crate::panels::user::UserPanel;
use crate::state::bootstrap::BootstrapState;
use crate::state::tabs::ActiveTab;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_meta_context();

    let bootstrap = RwSignal::new(BootstrapState::default());
    let active = RwSignal::new(ActiveTab::default());

    load_bootstrap(&config, bootstrap);

    provide_context(config);
    provide_context(bootstrap);

    view! {
        <Title text="Music Discovery Dashboard"/>

        <main class="dashboard">
            <StatusHeader/>
            <TabBar active=active/>
            <div class="dashboard__panel">
                {move || match active.get() {
                    ActiveTab::Genre => view! { <GenrePanel/> }.into_any(),
                    ActiveTab::Artist => view! { <ArtistPanel/> }.into_any(),
                    ActiveTab::Charts => view! { <ChartsPanel/> }.into_any(),
                    ActiveTab::Mood => view! { <MoodPanel/> }.into_any(),
                    ActiveTab::Mix => view! { <MixPanel/> }.into_any(),
                    ActiveTab::Discover => view! { <DiscoverPanel/> }.into_any(),
                    ActiveTab::User => view! { <UserPanel/> }.into_any(),
                }}
            </div>
        </main>
    }
}

/// Fire the genre and health requests once; each settles independently.
fn load_bootstrap(config: &DashboardConfig, bootstrap: RwSignal<BootstrapState>) {
    #[cfg(feature = "csr")]
    {
        use crate::net::api;
        use crate::net::query::{Endpoint, RecordQuery};
        use crate::net::types::Genre;

        let genres_config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_object::<Vec<Genre>>(&genres_config, &RecordQuery::bare(Endpoint::Genres)).await;
            bootstrap.update(|b| b.apply_genres(outcome));
        });

        let status_config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_db_status(&status_config).await;
            bootstrap.update(|b| b.apply_db_status(outcome));
        });
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, bootstrap);
    }
}
