use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] icon: Option<&'static str>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] submit: bool,
    #[prop(optional)] small: bool,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "btn {}{}{}",
        variant.class(),
        if full_width { " btn-full" } else { "" },
        if small { " btn-sm" } else { "" },
    );
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=class
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {icon.map(|glyph| view! { <span class="btn-icon">{glyph}</span> })}
            {children()}
        </button>
    }
}

/// Square button showing a single glyph, with a hover tooltip.
#[component]
pub fn IconButton(
    icon: &'static str,
    #[prop(into)] label: String,
    #[prop(optional)] variant: Option<ButtonVariant>,
    #[prop(optional)] small: bool,
    #[prop(optional, into)] extra_class: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = format!(
        "icon-btn {}{}{}",
        variant.unwrap_or(ButtonVariant::Ghost).class(),
        if small { " icon-btn-sm" } else { "" },
        extra_class.map(|c| format!(" {}", c)).unwrap_or_default(),
    );
    let aria_label = label.clone();
    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            on:click=move |e| {
                e.stop_propagation();
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {icon}
            <span class="tooltip">{label}</span>
        </button>
    }
}
