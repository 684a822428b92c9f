use crate::i18n::{Lang, tr};
use eatwise_core::{Account, Role};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RegisterPageProps {
    pub lang: Lang,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<Account>,
    pub on_go_login: Callback<()>,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| Role::EndUser);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
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
    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(parsed) = value.parse() {
                role.set(parsed);
            }
        })
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(Account::new(&name, &email, &password, *role));
        })
    };
    let go_login = {
        let cb = props.on_go_login.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-base-200" data-testid="register-screen">
            <div class="card bg-base-100 shadow-xl w-full max-w-md">
                <div class="card-body space-y-3">
                    <h1 class="text-xl font-semibold text-center">
                        { tr(props.lang, "register.title", &[(Lang::En, "Create an account"), (Lang::Hi, "खाता बनाएँ")]) }
                    </h1>
                    <p class="text-sm text-base-content/60 text-center">
                        { tr(props.lang, "register.subtitle", &[(Lang::En, "Sign up with your email and choose a role"), (Lang::Hi, "अपने ईमेल से साइन अप करें और भूमिका चुनें")]) }
                    </p>

                    <form onsubmit={on_submit} class="space-y-3">
                        <input class="input input-bordered w-full" placeholder="Full name"
                               value={(*name).clone()} oninput={on_name} data-testid="register-name" />
                        <input class="input input-bordered w-full" placeholder="Email"
                               value={(*email).clone()} oninput={on_email} data-testid="register-email" />
                        <input class="input input-bordered w-full" type="password" placeholder="Password"
                               value={(*password).clone()} oninput={on_password} data-testid="register-password" />
                        <select class="select select-bordered w-full" onchange={on_role}
                                value={role.as_str()} data-testid="register-role">
                            { for Role::all().iter().map(|r| html! {
                                <option value={r.as_str()} selected={*r == *role}>{ r.label() }</option>
                            }) }
                        </select>
                        { props.error.as_ref().map(|err| html!{
                            <p class="text-sm text-error" role="alert">{ err.clone() }</p>
                        }).unwrap_or_default() }
                        <button type="submit" class="btn btn-primary w-full">
                            { tr(props.lang, "register.submit", &[(Lang::En, "Create account"), (Lang::Hi, "खाता बनाएँ")]) }
                        </button>
                    </form>

                    <p class="text-sm text-base-content/60">
                        { tr(props.lang, "register.have_account", &[(Lang::En, "Already have an account?"), (Lang::Hi, "पहले से खाता है?")]) }
                        {" "}
                        <button class="link link-primary" onclick={go_login} data-testid="go-login">
                            { tr(props.lang, "register.sign_in", &[(Lang::En, "Sign in"), (Lang::Hi, "साइन इन")]) }
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
