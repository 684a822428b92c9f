use crate::components::chart::{BarChart, LineChart};
use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use eatwise_core::DataPoint;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AnalyticsPageProps {
    pub lang: Lang,
    pub trend: Vec<DataPoint>,
    /// Per-region weekly averages for the comparison chart.
    pub regional: Vec<DataPoint>,
}

#[function_component(AnalyticsPage)]
pub fn analytics_page(props: &AnalyticsPageProps) -> Html {
    html! {
        <div class="space-y-6" data-testid="analytics-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "analytics.title", &[(Lang::En, "Analytics"), (Lang::Hi, "विश्लेषिकी")]) }
            </h1>
            <Card title={tr(props.lang, "analytics.trend", &[(Lang::En, "Six-Month Trend"), (Lang::Hi, "छह माह की प्रवृत्ति")])}
                  subtitle={tr(props.lang, "analytics.trend_sub", &[(Lang::En, "Average household ml per month"), (Lang::Hi, "प्रति माह औसत घरेलू ml")])}>
                <LineChart data={props.trend.clone()} />
            </Card>
            <Card title={tr(props.lang, "analytics.regional", &[(Lang::En, "Regional Comparison"), (Lang::Hi, "क्षेत्रीय तुलना")])}>
                <BarChart data={props.regional.clone()} />
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalyticsPage, AnalyticsPageProps};
    use crate::i18n::Lang;
    use eatwise_core::MockData;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn analytics_renders_trend_and_regional_charts() {
        let mut data = MockData::new(8);
        let props = AnalyticsPageProps {
            lang: Lang::En,
            trend: data.monthly_trend(),
            regional: data.weekly_usage(),
        };
        let html = block_on(LocalServerRenderer::<AnalyticsPage>::with_props(props).render());
        assert!(html.contains("<polyline"));
        assert!(html.contains("<rect"));
    }
}
