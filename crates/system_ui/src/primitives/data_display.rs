use super::*;

#[component]
/// Shared card surface for feature panels, tiles, and summaries.
pub fn Card(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </p>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let tone = tone.token();
    match level {
        HeadingLevel::H2 => view! {
            <h2 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot data-ui-tone=tone>
                {children()}
            </h2>
        }
        .into_view(),
        HeadingLevel::H3 => view! {
            <h3 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-slot=ui_slot data-ui-tone=tone>
                {children()}
            </h3>
        }
        .into_view(),
    }
}

#[component]
/// Shared image primitive.
pub fn Image(
    #[prop(into)] src: MaybeSignal<String>,
    #[prop(optional, into)] alt: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    view! {
        <img
            src=move || src.get()
            alt=alt
            loading="lazy"
            class=merge_layout_class("ui-image", layout_class)
            data-ui-primitive="true"
            data-ui-kind="image"
            data-ui-slot=ui_slot
        />
    }
}
