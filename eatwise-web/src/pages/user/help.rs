use crate::components::ui::{Accordion, AccordionItem};
use crate::i18n::{Lang, tr};
use yew::prelude::*;

const FAQ: [(&str, &str); 4] = [
    (
        "How do I earn points?",
        "Log your daily oil use, claim the daily check-in bonus, and keep a weekly streak going.",
    ),
    (
        "Can I change my language later?",
        "Yes. Settings lets you switch between eleven languages at any time; the choice is remembered on this device.",
    ),
    (
        "What counts as one entry?",
        "One cooking session with one oil type. Log separate sessions separately for accurate totals.",
    ),
    (
        "Why did my redeem button grey out?",
        "Redeeming needs at least the listed number of points. Earn more and it unlocks again.",
    ),
];

#[derive(Properties, Clone, PartialEq)]
pub struct HelpPageProps {
    pub lang: Lang,
}

#[function_component(HelpPage)]
pub fn help_page(props: &HelpPageProps) -> Html {
    let items = FAQ
        .iter()
        .map(|(question, answer)| AccordionItem {
            question: (*question).to_string(),
            answer: (*answer).to_string(),
        })
        .collect::<Vec<_>>();

    html! {
        <div class="space-y-4" data-testid="help-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "help.title", &[(Lang::En, "Help & FAQ"), (Lang::Hi, "सहायता और सामान्य प्रश्न")]) }
            </h1>
            <Accordion {items} />
            <p class="text-sm text-base-content/60 text-center">
                { tr(props.lang, "help.contact", &[(Lang::En, "Still stuck? Write to support@healthyoil.example"), (Lang::Hi, "फिर भी अटके हैं? support@healthyoil.example पर लिखें")]) }
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{HelpPage, HelpPageProps};
    use crate::i18n::Lang;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn help_page_renders_every_faq_entry() {
        let props = HelpPageProps { lang: Lang::En };
        let html = block_on(LocalServerRenderer::<HelpPage>::with_props(props).render());
        for (question, _) in super::FAQ {
            assert!(html.contains(question));
        }
    }
}
