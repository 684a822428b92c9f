use yew::prelude::*;

/// Route guard around protected views.
///
/// While unauthenticated it renders nothing and asks the caller to
/// navigate to the login view from a post-render effect, so protected
/// content never mounts and never flashes.
#[derive(Properties, PartialEq, Clone)]
pub struct RequireAuthProps {
    pub authed: bool,
    pub on_unauthenticated: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    {
        let on_unauthenticated = props.on_unauthenticated.clone();
        use_effect_with(props.authed, move |authed| {
            if !authed {
                on_unauthenticated.emit(());
            }
        });
    }

    if props.authed {
        html! { <>{ for props.children.iter() }</> }
    } else {
        Html::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{RequireAuth, RequireAuthProps};
    use futures::executor::block_on;
    use yew::prelude::*;
    use yew::{Callback, LocalServerRenderer};

    #[derive(Properties, PartialEq, Clone)]
    struct HarnessProps {
        authed: bool,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <RequireAuth authed={props.authed} on_unauthenticated={Callback::noop()}>
                <p>{"secret content"}</p>
            </RequireAuth>
        }
    }

    #[test]
    fn children_render_only_when_authenticated() {
        let html = block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps { authed: true }).render(),
        );
        assert!(html.contains("secret content"));

        let html = block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps { authed: false }).render(),
        );
        assert!(!html.contains("secret content"));
    }
}
