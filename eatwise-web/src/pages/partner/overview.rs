use crate::components::chart::BarChart;
use crate::components::ui::{Card, Stat};
use crate::i18n::{Lang, tr};
use eatwise_core::DataPoint;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PartnerOverviewPageProps {
    pub lang: Lang,
    pub partner_name: AttrValue,
    /// Daily covers served this week, for the overview chart.
    pub weekly_covers: Vec<DataPoint>,
}

#[function_component(PartnerOverviewPage)]
pub fn partner_overview_page(props: &PartnerOverviewPageProps) -> Html {
    html! {
        <div class="space-y-6" data-testid="partner-overview-screen">
            <div>
                <h1 class="text-2xl font-bold">{ props.partner_name.clone() }</h1>
                <p class="text-sm text-base-content/60">
                    { tr(props.lang, "partner.tagline", &[(Lang::En, "Certified low-oil kitchen"), (Lang::Hi, "प्रमाणित कम-तेल रसोई")]) }
                </p>
            </div>
            <div class="grid grid-cols-2 gap-3">
                <Stat label={tr(props.lang, "partner.rating", &[(Lang::En, "Health Rating"), (Lang::Hi, "स्वास्थ्य रेटिंग")])}
                      value="4.6" hint="★★★★☆" />
                <Stat label={tr(props.lang, "partner.redemptions", &[(Lang::En, "Redemptions"), (Lang::Hi, "रिडेम्प्शन")])}
                      value="128"
                      hint={tr(props.lang, "partner.this_month", &[(Lang::En, "this month"), (Lang::Hi, "इस महीने")])} />
                <Stat label={tr(props.lang, "partner.oil_saved", &[(Lang::En, "Oil Saved"), (Lang::Hi, "तेल की बचत")])}
                      value="34L"
                      hint={tr(props.lang, "partner.vs_last", &[(Lang::En, "vs last quarter"), (Lang::Hi, "पिछली तिमाही से")])} />
                <Stat label={tr(props.lang, "partner.cert", &[(Lang::En, "Certification"), (Lang::Hi, "प्रमाणन")])}
                      value={tr(props.lang, "partner.gold", &[(Lang::En, "Gold"), (Lang::Hi, "गोल्ड")])} />
            </div>
            <Card title={tr(props.lang, "partner.covers", &[(Lang::En, "Covers This Week"), (Lang::Hi, "इस सप्ताह के ग्राहक")])}>
                <BarChart data={props.weekly_covers.clone()} />
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{PartnerOverviewPage, PartnerOverviewPageProps};
    use crate::i18n::Lang;
    use eatwise_core::MockData;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn overview_shows_partner_name_and_chart() {
        let props = PartnerOverviewPageProps {
            lang: Lang::En,
            partner_name: "Green Leaf Kitchen".into(),
            weekly_covers: MockData::new(11).weekly_usage(),
        };
        let html =
            block_on(LocalServerRenderer::<PartnerOverviewPage>::with_props(props).render());
        assert!(html.contains("Green Leaf Kitchen"));
        assert!(html.contains("<rect"));
    }
}
