use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use eatwise_core::CampaignSeed;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CampaignsPageProps {
    pub lang: Lang,
    pub seeds: Vec<CampaignSeed>,
}

/// Campaign list seeded from sample data plus locally added drafts.
/// Drafts reset on reload.
#[function_component(CampaignsPage)]
pub fn campaigns_page(props: &CampaignsPageProps) -> Html {
    let drafts = use_state(Vec::<CampaignSeed>::new);
    let name = use_state(String::new);
    let region = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_region = {
        let region = region.clone();
        Callback::from(move |e: InputEvent| {
            region.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let add = {
        let drafts = drafts.clone();
        let name = name.clone();
        let region = region.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if name.trim().is_empty() || region.trim().is_empty() {
                return;
            }
            let mut next = (*drafts).clone();
            next.push(CampaignSeed {
                name: name.trim().to_string(),
                region: region.trim().to_string(),
                reach: 0,
            });
            drafts.set(next);
            name.set(String::new());
            region.set(String::new());
        })
    };

    html! {
        <div class="space-y-4" data-testid="campaigns-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "campaigns.title", &[(Lang::En, "Campaigns"), (Lang::Hi, "अभियान")]) }
            </h1>
            <Card title={tr(props.lang, "campaigns.new", &[(Lang::En, "Launch Campaign"), (Lang::Hi, "अभियान शुरू करें")])}>
                <form onsubmit={add} class="space-y-2">
                    <input class="input input-bordered input-sm w-full" value={(*name).clone()}
                           oninput={on_name} data-testid="campaign-name"
                           placeholder={tr(props.lang, "campaigns.name", &[(Lang::En, "Campaign name"), (Lang::Hi, "अभियान का नाम")])} />
                    <input class="input input-bordered input-sm w-full" value={(*region).clone()}
                           oninput={on_region} data-testid="campaign-region"
                           placeholder={tr(props.lang, "campaigns.region", &[(Lang::En, "Region"), (Lang::Hi, "क्षेत्र")])} />
                    <button type="submit" class="btn btn-primary btn-sm w-full">
                        { tr(props.lang, "campaigns.launch", &[(Lang::En, "Launch"), (Lang::Hi, "शुरू करें")]) }
                    </button>
                </form>
            </Card>
            <div class="space-y-3" data-testid="campaign-list">
                { for props.seeds.iter().chain(drafts.iter()).map(|campaign| html! {
                    <Card title={campaign.name.clone()} subtitle={campaign.region.clone()}>
                        <p class="text-sm text-base-content/70">
                            { if campaign.reach == 0 {
                                tr(props.lang, "campaigns.draft", &[(Lang::En, "Draft, not yet live"), (Lang::Hi, "प्रारूप, अभी लाइव नहीं")])
                            } else {
                                format!("{} {}", campaign.reach,
                                    tr(props.lang, "campaigns.reached", &[(Lang::En, "people reached"), (Lang::Hi, "लोगों तक पहुँचा")]))
                            } }
                        </p>
                    </Card>
                }) }
            </div>
        </div>
    }
}
