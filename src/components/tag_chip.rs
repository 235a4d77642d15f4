use leptos::prelude::*;

#[component]
pub fn TagChip(
    #[prop(into)] label: String,
    #[prop(into)] color: String,
    #[prop(optional)] selected: bool,
    #[prop(optional, into)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    // Background and border are the tag color at 20% / 30% alpha.
    let style = format!(
        "background-color: {color}20; color: {color}; border-color: {color}30",
        color = color
    );
    let remove_label = format!("Remove {} tag", label);
    view! {
        <span class="tag" class:tag-selected=selected style=style>
            <span class="tag-dot" style=format!("background-color: {}", color)></span>
            {label}
            {on_delete.map(|cb| view! {
                <button
                    type="button"
                    class="tag-remove"
                    aria-label=remove_label
                    on:click=move |e| {
                        e.stop_propagation();
                        cb.run(());
                    }
                >"×"</button>
            })}
        </span>
    }
}
