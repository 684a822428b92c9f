use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Card)]
pub fn card(props: &CardProps) -> f::Html {
    let class = f::class_list(&["card", "bg-base-200", "shadow"], &props.class);
    f::html! {
        <article class={class} role="article">
            <div class="card-body gap-2">
                { if props.title.is_some() || props.subtitle.is_some() {
                    f::html! {
                        <header>
                            { props.title.as_ref().map(|title| f::html!{ <h3 class="card-title text-base">{ title.clone() }</h3> }).unwrap_or_default() }
                            { props.subtitle.as_ref().map(|sub| f::html!{ <p class="text-sm text-base-content/60">{ sub.clone() }</p> }).unwrap_or_default() }
                        </header>
                    }
                } else {
                    f::Html::default()
                } }
                { for props.children.iter() }
            </div>
        </article>
    }
}
