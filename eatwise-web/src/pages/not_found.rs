use crate::i18n::{Lang, tr};
use yew::prelude::*;

/// Catch-all view for unrecognized paths.
#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub lang: Lang,
    pub on_go_home: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundProps) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="min-h-screen flex flex-col items-center justify-center gap-4 p-4" aria-live="assertive" data-testid="not-found">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p class="text-base-content/60">
                { tr(props.lang, "not_found.message", &[(Lang::En, "This page does not exist."), (Lang::Hi, "यह पृष्ठ मौजूद नहीं है।")]) }
            </p>
            <button class="btn btn-primary" onclick={go_home}>
                { tr(props.lang, "not_found.back", &[(Lang::En, "Back to home"), (Lang::Hi, "होम पर वापस")]) }
            </button>
        </section>
    }
}
