//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    archive::ArchivePage, board::BoardPage, home::HomePage, login::LoginPage, post::PostPage,
    projects::ProjectsPage, write::WritePage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, mounts the global toast display,
/// kicks off the one-time session verification, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    // One credentialed verification per page load; fails closed on any error.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::auth::initialize(auth).await;
    });

    // Apply the persisted theme before the first route renders.
    crate::util::dark_mode::apply(crate::util::dark_mode::read_preference());

    view! {
        <Stylesheet id="leptos" href="/pkg/dypocrypha.css"/>
        <Title text="Dypocrypha"/>

        <Router>
            <NavBar/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=(StaticSegment("board"), ParamSegment("name")) view=BoardPage/>
                    <Route
                        path=(StaticSegment("board"), ParamSegment("name"), StaticSegment("write"))
                        view=WritePage
                    />
                    <Route path=(StaticSegment("post"), ParamSegment("id")) view=PostPage/>
                    <Route path=StaticSegment("archive") view=ArchivePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                </Routes>
            </main>
        </Router>
    }
}
