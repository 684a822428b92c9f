use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AboutPageProps {
    pub lang: Lang,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    html! {
        <div class="space-y-4" data-testid="about-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "about.title", &[(Lang::En, "About HealthyOil"), (Lang::Hi, "HealthyOil के बारे में")]) }
            </h1>
            <Card title={tr(props.lang, "about.mission", &[(Lang::En, "Our Mission"), (Lang::Hi, "हमारा मिशन")])}>
                <p class="text-sm text-base-content/70">
                    { tr(props.lang, "about.mission_body", &[
                        (Lang::En, "Help households cut excess cooking-oil intake through daily tracking, small nudges, and rewards."),
                        (Lang::Hi, "दैनिक ट्रैकिंग, छोटे संकेतों और इनामों के ज़रिए घरों को अतिरिक्त तेल की खपत घटाने में मदद करना।"),
                    ]) }
                </p>
            </Card>
            <Card title={tr(props.lang, "about.how", &[(Lang::En, "How it works"), (Lang::Hi, "यह कैसे काम करता है")])}>
                <ul class="list-disc list-inside text-sm text-base-content/70 space-y-1">
                    <li>{ tr(props.lang, "about.step1", &[(Lang::En, "Log every tablespoon of oil you cook with."), (Lang::Hi, "पकाने में इस्तेमाल हर चम्मच तेल लॉग करें।")]) }</li>
                    <li>{ tr(props.lang, "about.step2", &[(Lang::En, "Earn points for staying under your daily target."), (Lang::Hi, "दैनिक लक्ष्य के भीतर रहने पर अंक कमाएँ।")]) }</li>
                    <li>{ tr(props.lang, "about.step3", &[(Lang::En, "Redeem points with certified partner restaurants."), (Lang::Hi, "प्रमाणित साझेदार रेस्तरां में अंक रिडीम करें।")]) }</li>
                </ul>
            </Card>
            <p class="text-center text-xs text-base-content/50">{"HealthyOil v1.0"}</p>
        </div>
    }
}
