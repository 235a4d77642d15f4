use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::AppLayout;
use crate::features::tasks::hooks::{provide_search, provide_task_editor, provide_task_store};
use crate::features::tasks::TaskFormModal;
use crate::features::theme::provide_theme;
use crate::pages::{BoardPage, Dashboard, ListPage, NotFound, ProjectPage};

#[component]
pub fn App() -> impl IntoView {
    let store = provide_task_store();
    provide_task_editor();
    provide_search();
    provide_theme(store);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("") view=AppLayout>
                    <Route path=path!("") view=Dashboard />
                    <Route path=path!("board") view=BoardPage />
                    <Route path=path!("list") view=ListPage />
                    <Route path=path!("project/:id") view=ProjectPage />
                    <Route path=path!("*any") view=NotFound />
                </ParentRoute>
            </Routes>
            <TaskFormModal />
        </Router>
    }
}
