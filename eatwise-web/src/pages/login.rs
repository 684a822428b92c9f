use crate::i18n::{Lang, tr};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoginPageProps {
    pub lang: Lang,
    /// Inline error from the last failed attempt, if any.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Emits `(email, password)` on submit.
    pub on_submit: Callback<(String, String)>,
    pub on_reset_demo: Callback<()>,
    pub on_go_register: Callback<()>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(((*email).clone(), (*password).clone()));
        })
    };
    let reset_demo = {
        let cb = props.on_reset_demo.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let go_register = {
        let cb = props.on_go_register.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-base-200" data-testid="login-screen">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body space-y-3">
                    <h1 class="text-xl font-semibold text-center">
                        { tr(props.lang, "login.title", &[(Lang::En, "Welcome back"), (Lang::Hi, "वापसी पर स्वागत है")]) }
                    </h1>
                    <p class="text-sm text-base-content/60 text-center">
                        { tr(props.lang, "login.subtitle", &[(Lang::En, "Sign in with your email and password"), (Lang::Hi, "अपने ईमेल और पासवर्ड से साइन इन करें")]) }
                    </p>

                    <form onsubmit={on_submit} class="space-y-3">
                        <input class="input input-bordered w-full" placeholder="Email"
                               value={(*email).clone()} oninput={on_email} data-testid="login-email" />
                        <input class="input input-bordered w-full" type="password" placeholder="Password"
                               value={(*password).clone()} oninput={on_password} data-testid="login-password" />
                        { props.error.as_ref().map(|err| html!{
                            <p class="text-sm text-error" role="alert">{ err.clone() }</p>
                        }).unwrap_or_default() }
                        <button type="submit" class="btn btn-primary w-full">
                            { tr(props.lang, "login.submit", &[(Lang::En, "Sign in"), (Lang::Hi, "साइन इन")]) }
                        </button>
                    </form>

                    <div class="text-sm text-base-content/60 space-y-2">
                        <p>
                            { tr(props.lang, "login.no_account", &[(Lang::En, "Don't have an account?"), (Lang::Hi, "खाता नहीं है?")]) }
                            {" "}
                            <button class="link link-primary" onclick={go_register} data-testid="go-register">
                                { tr(props.lang, "login.register", &[(Lang::En, "Register"), (Lang::Hi, "पंजीकरण")]) }
                            </button>
                        </p>
                        <div>
                            <p class="font-medium">{"Demo credentials"}</p>
                            <ul class="text-xs list-disc ml-5">
                                <li>{"User — rajesh.kumar@example.com / user123"}</li>
                                <li>{"Partner — priya.partner@example.com / partner123"}</li>
                                <li>{"Policy maker — sanjay.policy@example.com / policy123"}</li>
                            </ul>
                            <button class="btn btn-ghost btn-xs mt-2" onclick={reset_demo} data-testid="reset-demo">
                                { tr(props.lang, "login.reset_demo", &[(Lang::En, "Reset demo users"), (Lang::Hi, "डेमो उपयोगकर्ता रीसेट करें")]) }
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
