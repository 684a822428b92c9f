use crate::components::ui::foundation as f;

/// Transient notification strip. The caller owns the message lifetime;
/// rendering `None` yields nothing.
#[derive(f::Properties, PartialEq, Clone)]
pub struct ToastProps {
    #[prop_or_default]
    pub message: Option<f::AttrValue>,
    #[prop_or_default]
    pub on_dismiss: f::Callback<()>,
}

#[f::function_component(Toast)]
pub fn toast(props: &ToastProps) -> f::Html {
    let Some(message) = props.message.clone() else {
        return f::Html::default();
    };
    let dismiss = {
        let cb = props.on_dismiss.clone();
        f::Callback::from(move |_| cb.emit(()))
    };
    f::html! {
        <div class="toast toast-top toast-center z-50" role="status" aria-live="polite" data-testid="toast">
            <div class="alert alert-info shadow">
                <span>{ message }</span>
                <button class="btn btn-ghost btn-xs" onclick={dismiss} aria-label="Dismiss">{"✕"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{Toast, ToastProps};
    use futures::executor::block_on;
    use yew::{Callback, LocalServerRenderer};

    #[test]
    fn toast_renders_message_or_nothing() {
        let props = ToastProps {
            message: Some("Points added".into()),
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
        assert!(html.contains("Points added"));

        let empty = ToastProps {
            message: None,
            on_dismiss: Callback::noop(),
        };
        let html = block_on(
            LocalServerRenderer::<Toast>::with_props(empty)
                .hydratable(false)
                .render(),
        );
        assert!(!html.contains("toast"));
    }
}
