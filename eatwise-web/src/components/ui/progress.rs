use crate::components::ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ProgressProps {
    pub value: u32,
    #[prop_or(100)]
    pub max: u32,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Progress)]
pub fn progress(props: &ProgressProps) -> f::Html {
    let class = f::class_list(&["progress", "progress-primary", "w-full"], &props.class);
    f::html! {
        <progress class={class} value={props.value.to_string()} max={props.max.to_string()} />
    }
}
