use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn-primary">"Back to Dashboard"</a>
        </div>
    }
}
