use crate::components::chart::{DonutChart, LineChart};
use crate::components::ui::{Card, Stat};
use crate::i18n::{Lang, tr};
use eatwise_core::DataPoint;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PolicyDashboardPageProps {
    pub lang: Lang,
    pub trend: Vec<DataPoint>,
    pub share: Vec<DataPoint>,
}

#[function_component(PolicyDashboardPage)]
pub fn policy_dashboard_page(props: &PolicyDashboardPageProps) -> Html {
    html! {
        <div class="space-y-6" data-testid="policy-dashboard-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "policy.title", &[(Lang::En, "Policy Dashboard"), (Lang::Hi, "नीति डैशबोर्ड")]) }
            </h1>
            <div class="grid grid-cols-2 gap-3">
                <Stat label={tr(props.lang, "policy.households", &[(Lang::En, "Households"), (Lang::Hi, "परिवार")])}
                      value="1.2M"
                      hint={tr(props.lang, "policy.tracked", &[(Lang::En, "tracking daily"), (Lang::Hi, "दैनिक ट्रैकिंग")])} />
                <Stat label={tr(props.lang, "policy.avg_drop", &[(Lang::En, "Avg. Reduction"), (Lang::Hi, "औसत कमी")])}
                      value="18%"
                      hint={tr(props.lang, "policy.yoy", &[(Lang::En, "year on year"), (Lang::Hi, "वर्ष दर वर्ष")])} />
                <Stat label={tr(props.lang, "policy.partners", &[(Lang::En, "Partners"), (Lang::Hi, "साझेदार")])}
                      value="3,410" />
                <Stat label={tr(props.lang, "policy.regions", &[(Lang::En, "Regions"), (Lang::Hi, "क्षेत्र")])}
                      value="28" />
            </div>
            <Card title={tr(props.lang, "policy.trend", &[(Lang::En, "Consumption Trend"), (Lang::Hi, "खपत की प्रवृत्ति")])}>
                <LineChart data={props.trend.clone()} />
            </Card>
            <Card title={tr(props.lang, "policy.share", &[(Lang::En, "Oil Type Share"), (Lang::Hi, "तेल प्रकार का हिस्सा")])}>
                <DonutChart data={props.share.clone()} />
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{PolicyDashboardPage, PolicyDashboardPageProps};
    use crate::i18n::Lang;
    use eatwise_core::MockData;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn dashboard_renders_both_charts() {
        let mut data = MockData::new(31);
        let props = PolicyDashboardPageProps {
            lang: Lang::En,
            trend: data.monthly_trend(),
            share: data.oil_share(),
        };
        let html =
            block_on(LocalServerRenderer::<PolicyDashboardPage>::with_props(props).render());
        assert!(html.contains("<polyline"));
        assert!(html.contains("<circle"));
        assert!(html.contains("Policy Dashboard"));
    }
}
