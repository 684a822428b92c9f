use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatProps {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
    #[prop_or_default]
    pub hint: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Stat)]
pub fn stat(props: &StatProps) -> f::Html {
    let class = f::class_list(&["stat", "bg-base-200", "rounded-box"], &props.class);
    f::html! {
        <div class={class}>
            <div class="stat-title text-xs">{ props.label.clone() }</div>
            <div class="stat-value text-2xl">{ props.value.clone() }</div>
            { props.hint.as_ref().map(|hint| f::html!{ <div class="stat-desc">{ hint.clone() }</div> }).unwrap_or_default() }
        </div>
    }
}
