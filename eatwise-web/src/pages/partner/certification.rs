use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use yew::prelude::*;

const CHECKLIST: [&str; 5] = [
    "Oil is never reused more than twice",
    "Dispensers with ml markings at every station",
    "Menu lists oil content per dish",
    "Staff trained on low-oil techniques this quarter",
    "Monthly oil purchase records available",
];

#[derive(Properties, Clone, PartialEq)]
pub struct CertificationPageProps {
    pub lang: Lang,
}

/// Self-declared certification checklist. Submission is simulated and
/// resets on reload.
#[function_component(CertificationPage)]
pub fn certification_page(props: &CertificationPageProps) -> Html {
    let checked = use_state(|| [false; CHECKLIST.len()]);
    let submitted = use_state(|| false);

    let all_checked = checked.iter().all(|c| *c);
    let submit = {
        let submitted = submitted.clone();
        Callback::from(move |_| submitted.set(true))
    };

    html! {
        <div class="space-y-4" data-testid="certification-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "cert.title", &[(Lang::En, "Certification"), (Lang::Hi, "प्रमाणन")]) }
            </h1>
            <Card title={tr(props.lang, "cert.checklist", &[(Lang::En, "Renewal Checklist"), (Lang::Hi, "नवीनीकरण चेकलिस्ट")])}>
                <ul class="space-y-2">
                    { for CHECKLIST.iter().enumerate().map(|(i, item)| {
                        let toggle = {
                            let checked = checked.clone();
                            Callback::from(move |_| {
                                let mut next = *checked;
                                next[i] = !next[i];
                                checked.set(next);
                            })
                        };
                        html! {
                            <li>
                                <label class="label cursor-pointer justify-start gap-3">
                                    <input type="checkbox" class="checkbox checkbox-sm"
                                           checked={checked[i]} onchange={toggle} />
                                    <span class="label-text text-sm">{ *item }</span>
                                </label>
                            </li>
                        }
                    }) }
                </ul>
                <button class="btn btn-primary w-full mt-2" onclick={submit}
                        disabled={!all_checked || *submitted} data-testid="cert-submit">
                    { if *submitted {
                        tr(props.lang, "cert.submitted", &[(Lang::En, "Submitted for review"), (Lang::Hi, "समीक्षा हेतु प्रस्तुत")])
                    } else {
                        tr(props.lang, "cert.submit", &[(Lang::En, "Submit renewal"), (Lang::Hi, "नवीनीकरण जमा करें")])
                    } }
                </button>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{CertificationPage, CertificationPageProps};
    use crate::i18n::Lang;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn checklist_starts_unchecked_with_submit_disabled() {
        let props = CertificationPageProps { lang: Lang::En };
        let html = block_on(LocalServerRenderer::<CertificationPage>::with_props(props).render());
        for item in super::CHECKLIST {
            assert!(html.contains(item));
        }
        assert!(html.contains("disabled"));
    }
}
