use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::{Navbar, Sidebar};

#[component]
pub fn AppLayout() -> impl IntoView {
    // Only matters on narrow screens, where the sidebar slides in.
    let sidebar_open = RwSignal::new(false);

    view! {
        <div class="app-shell">
            <Sidebar open=sidebar_open />
            <div class="app-main">
                <Navbar on_menu_click=move || sidebar_open.set(true) />
                <main class="app-content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
