use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use eatwise_core::AnalyzerVerdict;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

const ARTICLES: [(&str, &str); 3] = [
    (
        "Why reused oil is risky",
        "Each reheat of cooking oil raises trans-fat and polar-compound levels.",
    ),
    (
        "Choosing the right oil",
        "Match oil smoke points to how you cook: mustard for frying, olive for finishing.",
    ),
    (
        "Reading a nutrition label",
        "Per-100g fat numbers hide portion maths; check per-serving figures.",
    ),
];

/// One line of the coach conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub from_user: bool,
    pub text: String,
}

#[derive(Properties, Clone, PartialEq)]
pub struct LearnPageProps {
    pub lang: Lang,
    /// True while the simulated analysis delay is running.
    pub analyzing: bool,
    pub verdict: Option<AnalyzerVerdict>,
    pub on_analyze: Callback<()>,
    pub chat: Vec<ChatLine>,
    pub on_send: Callback<String>,
}

#[function_component(LearnPage)]
pub fn learn_page(props: &LearnPageProps) -> Html {
    let draft = use_state(String::new);

    let analyze = {
        let cb = props.on_analyze.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            draft.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let send = {
        let cb = props.on_send.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !draft.trim().is_empty() {
                cb.emit((*draft).clone());
                draft.set(String::new());
            }
        })
    };

    html! {
        <div class="space-y-6" data-testid="learn-screen">
            <Card title={tr(props.lang, "learn.analyzer", &[(Lang::En, "AI Meal Analyzer"), (Lang::Hi, "एआई भोजन विश्लेषक")])}
                  subtitle={tr(props.lang, "learn.analyzer_sub", &[(Lang::En, "Snap a dish, get an oil estimate"), (Lang::Hi, "व्यंजन की फोटो लें, तेल का अनुमान पाएँ")])}>
                <button class="btn btn-primary" onclick={analyze} disabled={props.analyzing} data-testid="analyze-btn">
                    { if props.analyzing {
                        tr(props.lang, "learn.analyzing", &[(Lang::En, "Analyzing…"), (Lang::Hi, "विश्लेषण हो रहा है…")])
                    } else {
                        tr(props.lang, "learn.analyze", &[(Lang::En, "Analyze sample dish"), (Lang::Hi, "नमूना व्यंजन का विश्लेषण करें")])
                    } }
                </button>
                { props.verdict.as_ref().map(|verdict| html! {
                    <div class="alert alert-success mt-2 flex-col items-start" data-testid="verdict">
                        <p class="font-semibold">{ verdict.dish.clone() }</p>
                        <p class="text-sm">{ format!("Estimated oil: {}ml", verdict.estimated_oil_ml) }</p>
                        <p class="text-sm">{ verdict.advice.clone() }</p>
                    </div>
                }).unwrap_or_default() }
            </Card>

            <Card title={tr(props.lang, "learn.coach", &[(Lang::En, "Oil Coach"), (Lang::Hi, "ऑयल कोच")])}>
                <div class="space-y-2 max-h-64 overflow-y-auto" data-testid="chat-log">
                    { for props.chat.iter().map(|line| {
                        let class = if line.from_user {
                            "chat chat-end"
                        } else {
                            "chat chat-start"
                        };
                        html! {
                            <div {class}>
                                <div class="chat-bubble text-sm">{ line.text.clone() }</div>
                            </div>
                        }
                    }) }
                </div>
                <form onsubmit={send} class="flex gap-2 mt-2">
                    <input class="input input-bordered input-sm flex-1"
                           placeholder={tr(props.lang, "learn.ask", &[(Lang::En, "Ask the coach…"), (Lang::Hi, "कोच से पूछें…")])}
                           value={(*draft).clone()} oninput={on_draft} data-testid="chat-input" />
                    <button type="submit" class="btn btn-primary btn-sm">{"➤"}</button>
                </form>
            </Card>

            <div class="space-y-3">
                <h2 class="text-lg font-semibold">
                    { tr(props.lang, "learn.articles", &[(Lang::En, "Learn"), (Lang::Hi, "सीखें")]) }
                </h2>
                { for ARTICLES.iter().map(|(title, body)| html! {
                    <Card title={*title}>
                        <p class="text-sm text-base-content/70">{ *body }</p>
                    </Card>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{ChatLine, LearnPage, LearnPageProps};
    use crate::i18n::Lang;
    use eatwise_core::AnalyzerVerdict;
    use futures::executor::block_on;
    use yew::{Callback, LocalServerRenderer};

    #[test]
    fn learn_page_shows_verdict_when_present() {
        let props = LearnPageProps {
            lang: Lang::En,
            analyzing: false,
            verdict: Some(AnalyzerVerdict {
                dish: "Aloo Paratha".into(),
                estimated_oil_ml: 25,
                advice: "Brush, don't fry.".into(),
            }),
            on_analyze: Callback::noop(),
            chat: vec![ChatLine {
                from_user: false,
                text: "Hello!".into(),
            }],
            on_send: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LearnPage>::with_props(props).render());
        assert!(html.contains("Aloo Paratha"));
        assert!(html.contains("Estimated oil: 25ml"));
        assert!(html.contains("Hello!"));
    }

    #[test]
    fn analyze_button_disabled_while_running() {
        let props = LearnPageProps {
            lang: Lang::En,
            analyzing: true,
            verdict: None,
            on_analyze: Callback::noop(),
            chat: vec![],
            on_send: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LearnPage>::with_props(props).render());
        assert!(html.contains("disabled"));
        assert!(!html.contains("verdict\""));
    }
}
