use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use eatwise_core::{Gender, Profile, ProfilePatch};
use std::str::FromStr;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProfilePageProps {
    pub lang: Lang,
    pub profile: Profile,
    pub on_save: Callback<ProfilePatch>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let name = use_state(|| props.profile.name.clone());
    let email = use_state(|| props.profile.email.clone());
    let phone = use_state(|| props.profile.phone.clone());
    let location = use_state(|| props.profile.location.clone());
    let gender = use_state(|| props.profile.gender);
    let saved = use_state(|| false);

    let input = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            handle.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_gender = {
        let gender = gender.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(parsed) = Gender::from_str(&value) {
                gender.set(parsed);
            }
        })
    };

    let submit = {
        let on_save = props.on_save.clone();
        let (name, email, phone) = (name.clone(), email.clone(), phone.clone());
        let (location, gender, saved) = (location.clone(), gender.clone(), saved.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(ProfilePatch {
                name: Some((*name).clone()),
                email: Some((*email).clone()),
                phone: Some((*phone).clone()),
                location: Some((*location).clone()),
                gender: Some(*gender),
                avatar: None,
            });
            saved.set(true);
        })
    };

    html! {
        <div class="space-y-4" data-testid="profile-screen">
            <div class="flex flex-col items-center gap-2">
                <img class="w-24 h-24 rounded-full" src={props.profile.avatar.clone()} alt="avatar" />
                <h1 class="text-xl font-bold">{ props.profile.name.clone() }</h1>
            </div>
            <Card title={tr(props.lang, "profile.edit", &[(Lang::En, "Edit Profile"), (Lang::Hi, "प्रोफ़ाइल संपादित करें")])}>
                <form onsubmit={submit} class="space-y-3">
                    <input class="input input-bordered w-full" value={(*name).clone()}
                           oninput={input(name.clone())} data-testid="profile-name"
                           placeholder={tr(props.lang, "profile.name", &[(Lang::En, "Full name"), (Lang::Hi, "पूरा नाम")])} />
                    <input class="input input-bordered w-full" type="email" value={(*email).clone()}
                           oninput={input(email.clone())} data-testid="profile-email"
                           placeholder={tr(props.lang, "profile.email", &[(Lang::En, "Email"), (Lang::Hi, "ईमेल")])} />
                    <input class="input input-bordered w-full" type="tel" value={(*phone).clone()}
                           oninput={input(phone.clone())}
                           placeholder={tr(props.lang, "profile.phone", &[(Lang::En, "Phone"), (Lang::Hi, "फ़ोन")])} />
                    <input class="input input-bordered w-full" value={(*location).clone()}
                           oninput={input(location.clone())}
                           placeholder={tr(props.lang, "profile.location", &[(Lang::En, "Location"), (Lang::Hi, "स्थान")])} />
                    <select class="select select-bordered w-full" onchange={on_gender} value={gender.as_str()}>
                        { for Gender::all().into_iter().map(|g| html! {
                            <option value={g.as_str()} selected={g == *gender}>{ g.label() }</option>
                        }) }
                    </select>
                    <button type="submit" class="btn btn-primary w-full" data-testid="profile-save">
                        { tr(props.lang, "profile.save", &[(Lang::En, "Save changes"), (Lang::Hi, "परिवर्तन सहेजें")]) }
                    </button>
                    { (*saved).then(|| html! {
                        <p class="text-success text-sm text-center" data-testid="profile-saved">
                            { tr(props.lang, "profile.saved", &[(Lang::En, "Profile updated"), (Lang::Hi, "प्रोफ़ाइल अपडेट हुई")]) }
                        </p>
                    }).unwrap_or_default() }
                </form>
            </Card>
        </div>
    }
}
