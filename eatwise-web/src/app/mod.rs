use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod state;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();

    let navigator = use_navigator();
    let navigate = {
        Callback::from(move |route: Route| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&route);
            }
        })
    };

    // Mirror the selections onto the document.
    use_effect_with((*app_state.theme).clone(), |theme| {
        crate::dom::apply_theme(theme.as_str());
    });
    use_effect_with(*app_state.lang, |lang| crate::i18n::set_lang(*lang));

    let render = {
        let app_state = app_state.clone();
        move |route: Route| view::render_route(&app_state, route, &navigate)
    };
    html! { <Switch<Route> render={render} /> }
}
