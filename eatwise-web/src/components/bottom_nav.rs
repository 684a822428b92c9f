use crate::router::Route;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub icon: &'static str,
    pub label: String,
    pub route: Route,
}

impl NavItem {
    #[must_use]
    pub fn new(icon: &'static str, label: impl Into<String>, route: Route) -> Self {
        Self {
            icon,
            label: label.into(),
            route,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BottomNavProps {
    pub items: Vec<NavItem>,
    /// Current route; the active tab is picked by exact match.
    pub active: Route,
    pub on_navigate: Callback<Route>,
}

/// Fixed bottom tab bar with one destination list per role shell.
#[function_component(BottomNav)]
pub fn bottom_nav(props: &BottomNavProps) -> Html {
    html! {
        <nav class="btm-nav fixed bottom-0 left-0 right-0 z-40 bg-base-100 border-t border-base-300 h-16" aria-label="Primary" data-testid="bottom-nav">
            { for props.items.iter().map(|item| {
                let is_active = item.route == props.active;
                let on_navigate = props.on_navigate.clone();
                let route = item.route.clone();
                let onclick = Callback::from(move |_| on_navigate.emit(route.clone()));
                let class = if is_active {
                    "active text-primary"
                } else {
                    "text-base-content/60"
                };
                html! {
                    <button {class} {onclick} aria-current={is_active.then_some("page")}>
                        <span aria-hidden="true">{ item.icon }</span>
                        <span class="btm-nav-label text-[10px]">{ item.label.clone() }</span>
                    </button>
                }
            }) }
        </nav>
    }
}
