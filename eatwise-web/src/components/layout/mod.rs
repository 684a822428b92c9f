//! Role-specific layout shells: fixed header, content container, fixed
//! bottom tab bar. The partner and policy shells additionally bounce a
//! mismatched role back to the end-user home.

use crate::components::bottom_nav::{BottomNav, NavItem};
use crate::components::header::Header;
use crate::i18n::{Lang, tr};
use crate::router::Route;
use eatwise_core::Role;
use yew::prelude::*;

mod nav;

pub use nav::{partner_nav, policy_nav, user_menu, user_nav};

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub lang: Lang,
    pub theme: AttrValue,
    pub active: Route,
    pub on_navigate: Callback<Route>,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

fn shell(props: &ShellProps, menu_items: Vec<(String, Route)>, tabs: Vec<NavItem>) -> Html {
    html! {
        <div class="min-h-screen bg-base-100">
            <Header
                lang={props.lang}
                theme={props.theme.clone()}
                menu_items={menu_items}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_navigate={props.on_navigate.clone()}
                on_logout={props.on_logout.clone()}
            />
            <main id="main" class="pt-14 pb-20 min-h-screen">
                <div class="container mx-auto px-4 py-6 max-w-md space-y-6">
                    { for props.children.iter() }
                </div>
            </main>
            <BottomNav items={tabs} active={props.active.clone()} on_navigate={props.on_navigate.clone()} />
        </div>
    }
}

/// End-user shell.
#[function_component(UserLayout)]
pub fn user_layout(props: &ShellProps) -> Html {
    shell(props, user_menu(props.lang), user_nav(props.lang))
}

#[derive(Properties, PartialEq, Clone)]
pub struct RoleShellProps {
    pub lang: Lang,
    pub theme: AttrValue,
    pub active: Route,
    /// Role of the current session; a mismatch redirects to home.
    pub role: Role,
    pub on_navigate: Callback<Route>,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

fn role_guarded_shell(props: &RoleShellProps, expected: Role, tabs: Vec<NavItem>) -> Html {
    {
        let on_navigate = props.on_navigate.clone();
        let role = props.role;
        use_effect_with(role, move |role| {
            if *role != expected {
                on_navigate.emit(Route::Home);
            }
        });
    }
    if props.role != expected {
        return Html::default();
    }

    let menu = vec![
        (
            tr(
                props.lang,
                "menu.settings",
                &[(Lang::En, "Settings"), (Lang::Hi, "सेटिंग्स")],
            ),
            Route::Settings,
        ),
        (
            tr(
                props.lang,
                "menu.help",
                &[(Lang::En, "Help"), (Lang::Hi, "सहायता")],
            ),
            Route::Help,
        ),
    ];
    let inner = ShellProps {
        lang: props.lang,
        theme: props.theme.clone(),
        active: props.active.clone(),
        on_navigate: props.on_navigate.clone(),
        on_toggle_theme: props.on_toggle_theme.clone(),
        on_logout: props.on_logout.clone(),
        children: props.children.clone(),
    };
    shell(&inner, menu, tabs)
}

/// Restaurant-partner shell; redirects when the session is not a partner.
#[function_component(PartnerLayout)]
pub fn partner_layout(props: &RoleShellProps) -> Html {
    role_guarded_shell(props, Role::Partner, partner_nav(props.lang))
}

/// Policy-maker shell; redirects when the session is not a policy maker.
#[function_component(PolicyLayout)]
pub fn policy_layout(props: &RoleShellProps) -> Html {
    role_guarded_shell(props, Role::PolicyMaker, policy_nav(props.lang))
}

#[cfg(test)]
mod tests {
    use super::{PartnerLayout, RoleShellProps, ShellProps, UserLayout};
    use crate::i18n::Lang;
    use crate::router::Route;
    use eatwise_core::Role;
    use futures::executor::block_on;
    use yew::{Callback, LocalServerRenderer};

    fn shell_props() -> ShellProps {
        ShellProps {
            lang: Lang::En,
            theme: "light".into(),
            active: Route::Home,
            on_navigate: Callback::noop(),
            on_toggle_theme: Callback::noop(),
            on_logout: Callback::noop(),
            children: Default::default(),
        }
    }

    #[test]
    fn user_layout_renders_header_and_tabs() {
        let html =
            block_on(LocalServerRenderer::<UserLayout>::with_props(shell_props()).render());
        assert!(html.contains("HealthyOil"));
        assert!(html.contains("bottom-nav"));
    }

    #[test]
    fn partner_layout_hides_content_for_wrong_role() {
        let props = RoleShellProps {
            lang: Lang::En,
            theme: "light".into(),
            active: Route::PartnerDashboard,
            role: Role::EndUser,
            on_navigate: Callback::noop(),
            on_toggle_theme: Callback::noop(),
            on_logout: Callback::noop(),
            children: Default::default(),
        };
        let html = block_on(LocalServerRenderer::<PartnerLayout>::with_props(props).render());
        assert!(!html.contains("bottom-nav"));
    }

    #[test]
    fn partner_layout_renders_for_partner_role() {
        let props = RoleShellProps {
            lang: Lang::En,
            theme: "light".into(),
            active: Route::PartnerDashboard,
            role: Role::Partner,
            on_navigate: Callback::noop(),
            on_toggle_theme: Callback::noop(),
            on_logout: Callback::noop(),
            children: Default::default(),
        };
        let html = block_on(LocalServerRenderer::<PartnerLayout>::with_props(props).render());
        assert!(html.contains("bottom-nav"));
        assert!(html.contains("Certification"));
    }
}
