//! Projects page — read-only tracking table.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::state::toast::ToastState;
use crate::util::redirect_stash;

/// Projects page — lists tracked projects with status and period.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    redirect_stash::install_drain(toasts);

    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(fetched) = crate::net::api::fetch_projects().await {
                projects.set(fetched);
            }
            loading.set(false);
        });
    });

    view! {
        <div class="projects-page">
            <h1>"Projects"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="projects-page__loading">"Loading projects..."</p> }
            >
                {move || {
                    projects
                        .get()
                        .into_iter()
                        .map(|project| {
                            let status_class =
                                format!("project-card__status project-card__status--{}", project.status);
                            view! {
                                <div class="project-card">
                                    <div class="project-card__head">
                                        <h2>{project.name}</h2>
                                        <span class=status_class>{project.status}</span>
                                    </div>
                                    <p class="project-card__period">
                                        {format!("{} ~ {}", project.start_date, project.end_date)}
                                    </p>
                                    <p class="project-card__description">{project.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}
