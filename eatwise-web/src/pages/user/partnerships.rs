use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use yew::prelude::*;

const PARTNERS: [(&str, &str, u8); 4] = [
    ("Green Leaf Kitchen", "Certified low-oil thali and tandoor menu", 5),
    ("Spice Route Express", "Air-fried street food classics", 4),
    ("Coastal Curry House", "Steamed and grilled seafood specials", 4),
    ("Urban Dosa Co.", "Measured-oil dosas with millet batters", 3),
];

#[derive(Properties, Clone, PartialEq)]
pub struct PartnershipsPageProps {
    pub lang: Lang,
}

#[function_component(PartnershipsPage)]
pub fn partnerships_page(props: &PartnershipsPageProps) -> Html {
    html! {
        <div class="space-y-4" data-testid="partnerships-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "partnerships.title", &[(Lang::En, "Partner Restaurants"), (Lang::Hi, "साझेदार रेस्तरां")]) }
            </h1>
            <p class="text-sm text-base-content/60">
                { tr(props.lang, "partnerships.subtitle", &[(Lang::En, "Certified kitchens that cook with less oil."), (Lang::Hi, "प्रमाणित रसोइयाँ जो कम तेल में पकाती हैं।")]) }
            </p>
            { for PARTNERS.iter().map(|(name, detail, stars)| html! {
                <Card title={*name}>
                    <p class="text-sm text-base-content/70">{ *detail }</p>
                    <p class="text-warning">{ ("★").repeat(usize::from(*stars)) }</p>
                </Card>
            }) }
        </div>
    }
}
