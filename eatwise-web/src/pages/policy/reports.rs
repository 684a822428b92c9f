use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use yew::prelude::*;

const REPORTS: [(&str, &str, &str); 4] = [
    (
        "Quarterly Oil Consumption Review",
        "Q2 2025",
        "State-wise household intake against WHO guidance.",
    ),
    (
        "Partner Certification Summary",
        "Jun 2025",
        "Renewal rates and audit outcomes across certified kitchens.",
    ),
    (
        "School Canteen Pilot",
        "May 2025",
        "Outcomes of the measured-dispenser rollout in 120 canteens.",
    ),
    (
        "Awareness Campaign Impact",
        "Apr 2025",
        "Reach and self-reported behavior change by region.",
    ),
];

#[derive(Properties, Clone, PartialEq)]
pub struct ReportsPageProps {
    pub lang: Lang,
}

#[function_component(ReportsPage)]
pub fn reports_page(props: &ReportsPageProps) -> Html {
    html! {
        <div class="space-y-4" data-testid="reports-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "reports.title", &[(Lang::En, "Reports"), (Lang::Hi, "रिपोर्ट")]) }
            </h1>
            { for REPORTS.iter().map(|(title, period, summary)| html! {
                <Card title={*title} subtitle={*period}>
                    <p class="text-sm text-base-content/70">{ *summary }</p>
                    <button class="btn btn-outline btn-xs self-start">
                        { tr(props.lang, "reports.download", &[(Lang::En, "Download PDF"), (Lang::Hi, "PDF डाउनलोड करें")]) }
                    </button>
                </Card>
            }) }
        </div>
    }
}
