use crate::components::ui::{Card, Progress};
use crate::i18n::{Lang, tr};
use eatwise_core::AuditScore;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AuditPageProps {
    pub lang: Lang,
    pub scores: Vec<AuditScore>,
}

#[function_component(AuditPage)]
pub fn audit_page(props: &AuditPageProps) -> Html {
    let overall = if props.scores.is_empty() {
        0
    } else {
        props.scores.iter().map(|s| s.score).sum::<u32>() / props.scores.len() as u32
    };

    html! {
        <div class="space-y-4" data-testid="audit-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "audit.title", &[(Lang::En, "Audit Dashboard"), (Lang::Hi, "ऑडिट डैशबोर्ड")]) }
            </h1>
            <Card title={tr(props.lang, "audit.overall", &[(Lang::En, "Overall Score"), (Lang::Hi, "कुल स्कोर")])}>
                <p class="text-4xl font-bold" data-testid="audit-overall">{ format!("{overall}/100") }</p>
                <Progress value={overall} />
            </Card>
            <Card title={tr(props.lang, "audit.categories", &[(Lang::En, "By Category"), (Lang::Hi, "श्रेणी अनुसार")])}>
                <ul class="space-y-3">
                    { for props.scores.iter().map(|score| {
                        let below = score.score < score.target;
                        html! {
                            <li>
                                <div class="flex justify-between text-sm">
                                    <span>{ score.category.clone() }</span>
                                    <span class={below.then_some("text-warning")}>
                                        { format!("{} / {}", score.score, score.target) }
                                    </span>
                                </div>
                                <Progress value={score.score} />
                            </li>
                        }
                    }) }
                </ul>
            </Card>
        </div>
    }
}
