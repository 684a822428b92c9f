use crate::components::chart::{BarChart, ChartProps};
use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use eatwise_core::{DataPoint, OilEntry, OilKind, tracker::HEALTH_TIPS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TrackerPageProps {
    pub lang: Lang,
    pub entries: Vec<OilEntry>,
    pub weekly: Vec<DataPoint>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Emits `(oil kind, quantity text, date)` from the log form.
    pub on_log: Callback<(Option<OilKind>, String, String)>,
}

#[function_component(TrackerPage)]
pub fn tracker_page(props: &TrackerPageProps) -> Html {
    let kind = use_state(|| None::<OilKind>);
    let quantity = use_state(String::new);
    let date = use_state(|| String::from("2025-10-24"));

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            kind.set(value.parse().ok());
        })
    };
    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            quantity.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_date = {
        let date = date.clone();
        Callback::from(move |e: InputEvent| {
            date.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_submit = {
        let cb = props.on_log.clone();
        let kind = kind.clone();
        let quantity = quantity.clone();
        let date = date.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*kind, (*quantity).clone(), (*date).clone()));
        })
    };

    html! {
        <div class="space-y-6" data-testid="tracker-screen">
            <Card title={tr(props.lang, "tracker.log_title", &[(Lang::En, "Log Oil Usage"), (Lang::Hi, "तेल उपयोग दर्ज करें")])}>
                <form onsubmit={on_submit} class="space-y-3">
                    <label class="text-xs uppercase tracking-wide opacity-70" for="oil-kind">
                        { tr(props.lang, "tracker.oil_type", &[(Lang::En, "Oil type"), (Lang::Hi, "तेल का प्रकार")]) }
                    </label>
                    <select id="oil-kind" class="select select-bordered w-full" onchange={on_kind} data-testid="oil-kind">
                        <option value="" selected={kind.is_none()}>{"—"}</option>
                        { for OilKind::all().iter().map(|k| html! {
                            <option value={k.label()} selected={Some(*k) == *kind}>{ k.label() }</option>
                        }) }
                    </select>
                    <label class="text-xs uppercase tracking-wide opacity-70" for="oil-qty">
                        { tr(props.lang, "tracker.quantity", &[(Lang::En, "Quantity (ml)"), (Lang::Hi, "मात्रा (ml)")]) }
                    </label>
                    <input id="oil-qty" class="input input-bordered w-full" type="number" min="1"
                           value={(*quantity).clone()} oninput={on_quantity} data-testid="oil-qty" />
                    <input class="input input-bordered w-full" type="date"
                           value={(*date).clone()} oninput={on_date} data-testid="oil-date" />
                    { props.error.as_ref().map(|err| html!{
                        <p class="text-sm text-error" role="alert">{ err.clone() }</p>
                    }).unwrap_or_default() }
                    <button type="submit" class="btn btn-primary w-full" data-testid="log-submit">
                        { tr(props.lang, "tracker.submit", &[(Lang::En, "Add entry"), (Lang::Hi, "प्रविष्टि जोड़ें")]) }
                    </button>
                </form>
            </Card>

            <Card title={tr(props.lang, "tracker.week", &[(Lang::En, "This Week"), (Lang::Hi, "इस सप्ताह")])}>
                <BarChart ..ChartProps { data: props.weekly.clone(), class: Classes::new() } />
            </Card>

            <Card title={tr(props.lang, "tracker.recent", &[(Lang::En, "Recent Entries"), (Lang::Hi, "हाल की प्रविष्टियाँ")])}>
                <ul class="divide-y divide-base-300" data-testid="entry-list">
                    { for props.entries.iter().map(|entry| html! {
                        <li class="py-2 flex items-center justify-between text-sm">
                            <div>
                                <p class="font-medium">{ entry.kind.label() }</p>
                                <p class="text-xs text-base-content/60">{ format!("{} · {}", entry.date, entry.time) }</p>
                            </div>
                            <span class="badge badge-outline">{ format!("{}ml", entry.amount_ml) }</span>
                        </li>
                    }) }
                </ul>
            </Card>

            <Card title={tr(props.lang, "tracker.tips", &[(Lang::En, "Health Tips"), (Lang::Hi, "स्वास्थ्य सुझाव")])}>
                <ul class="list-disc ml-5 text-sm space-y-1">
                    { for HEALTH_TIPS.iter().map(|tip| html! { <li>{ *tip }</li> }) }
                </ul>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{TrackerPage, TrackerPageProps};
    use crate::i18n::Lang;
    use eatwise_core::TrackerLog;
    use futures::executor::block_on;
    use yew::{Callback, LocalServerRenderer};

    #[test]
    fn tracker_lists_entries_and_chart() {
        let log = TrackerLog::default();
        let props = TrackerPageProps {
            lang: Lang::En,
            entries: log.entries().to_vec(),
            weekly: eatwise_core::MockData::new(1).weekly_usage(),
            error: None,
            on_log: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TrackerPage>::with_props(props).render());
        assert!(html.contains("Mustard Oil"));
        assert!(html.contains("bar-chart"));
        assert!(html.contains("entry-list"));
    }

    #[test]
    fn tracker_surfaces_inline_error() {
        let props = TrackerPageProps {
            lang: Lang::En,
            entries: vec![],
            weekly: vec![],
            error: Some("oil type and quantity are required".into()),
            on_log: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TrackerPage>::with_props(props).render());
        assert!(html.contains("oil type and quantity are required"));
    }
}
