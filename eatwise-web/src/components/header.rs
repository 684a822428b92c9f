use crate::i18n::{Lang, tr};
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub lang: Lang,
    /// Active theme, `light` or `dark`.
    pub theme: AttrValue,
    /// Secondary destinations shown in the collapsible drawer menu.
    pub menu_items: Vec<(String, Route)>,
    pub on_toggle_theme: Callback<()>,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

/// Fixed app header: brand, theme toggle, drawer menu with logout.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let open = use_state(|| false);

    let toggle_menu = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };
    let toggle_theme = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let logout = {
        let cb = props.on_logout.clone();
        let open = open.clone();
        Callback::from(move |_| {
            open.set(false);
            cb.emit(());
        })
    };

    let theme_icon = if props.theme.as_str() == "dark" {
        "🌙"
    } else {
        "☀️"
    };

    html! {
        <header class="navbar fixed top-0 left-0 right-0 z-40 bg-base-100 border-b border-base-300 min-h-14" role="banner">
            <div class="navbar-start">
                <h1 class="text-lg font-bold text-primary">{"HealthyOil"}</h1>
            </div>
            <div class="navbar-end gap-1">
                <button
                    class="btn btn-ghost btn-circle btn-sm"
                    onclick={toggle_theme}
                    aria-label={tr(props.lang, "header.theme", &[(Lang::En, "Toggle theme"), (Lang::Hi, "थीम बदलें")])}
                    data-testid="theme-toggle"
                >
                    { theme_icon }
                </button>
                <button
                    class="btn btn-ghost btn-circle btn-sm"
                    onclick={toggle_menu.clone()}
                    aria-expanded={open.to_string()}
                    aria-label={tr(props.lang, "header.menu", &[(Lang::En, "Menu"), (Lang::Hi, "मेनू")])}
                    data-testid="menu-toggle"
                >
                    {"☰"}
                </button>
            </div>
            { if *open {
                html! {
                    <nav class="menu absolute top-14 right-0 w-64 bg-base-100 border border-base-300 shadow-lg p-4 space-y-1" aria-label="Secondary" data-testid="drawer-menu">
                        { for props.menu_items.iter().map(|(label, route)| {
                            let on_navigate = props.on_navigate.clone();
                            let route = route.clone();
                            let open = open.clone();
                            let onclick = Callback::from(move |_| {
                                open.set(false);
                                on_navigate.emit(route.clone());
                            });
                            html! {
                                <button class="btn btn-ghost btn-sm w-full justify-start" {onclick}>
                                    { label.clone() }
                                </button>
                            }
                        }) }
                        <button class="btn btn-ghost btn-sm w-full justify-start text-error" onclick={logout} data-testid="logout">
                            { tr(props.lang, "header.logout", &[(Lang::En, "Log out"), (Lang::Hi, "लॉग आउट")]) }
                        </button>
                    </nav>
                }
            } else {
                Html::default()
            } }
        </header>
    }
}
