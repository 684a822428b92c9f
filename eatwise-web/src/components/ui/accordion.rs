use crate::components::ui::foundation as f;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub question: String,
    pub answer: String,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct AccordionProps {
    pub items: Vec<AccordionItem>,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Radio-backed collapse list; one item open at a time.
#[f::function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> f::Html {
    let class = f::class_list(&["space-y-2"], &props.class);
    f::html! {
        <div class={class}>
            { for props.items.iter().map(|item| f::html! {
                <div class="collapse collapse-arrow bg-base-200">
                    <input type="radio" name="faq-accordion" />
                    <div class="collapse-title font-medium">{ item.question.clone() }</div>
                    <div class="collapse-content text-sm text-base-content/70">
                        <p>{ item.answer.clone() }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}
