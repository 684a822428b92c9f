use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use std::str::FromStr;
use web_sys::HtmlSelectElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SettingsPageProps {
    pub lang: Lang,
    /// Current theme name, "light" or "dark".
    pub theme: AttrValue,
    pub on_lang_change: Callback<Lang>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let on_lang = {
        let cb = props.on_lang_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Ok(lang) = Lang::from_str(&value) {
                cb.emit(lang);
            }
        })
    };
    let toggle = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let dark = props.theme == "dark";

    html! {
        <div class="space-y-4" data-testid="settings-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "settings.title", &[(Lang::En, "Settings"), (Lang::Hi, "सेटिंग्स")]) }
            </h1>
            <Card title={tr(props.lang, "settings.language", &[(Lang::En, "Language"), (Lang::Hi, "भाषा")])}>
                <select class="select select-bordered w-full" onchange={on_lang} data-testid="lang-select">
                    { for Lang::all().into_iter().map(|lang| html! {
                        <option value={lang.code()} selected={lang == props.lang}>
                            { lang.native_name() }
                        </option>
                    }) }
                </select>
            </Card>
            <Card title={tr(props.lang, "settings.appearance", &[(Lang::En, "Appearance"), (Lang::Hi, "रूप")])}>
                <label class="label cursor-pointer justify-between">
                    <span class="label-text">
                        { tr(props.lang, "settings.dark", &[(Lang::En, "Dark mode"), (Lang::Hi, "डार्क मोड")]) }
                    </span>
                    <input type="checkbox" class="toggle" checked={dark} onchange={toggle}
                           data-testid="theme-switch" />
                </label>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{SettingsPage, SettingsPageProps};
    use crate::i18n::Lang;
    use futures::executor::block_on;
    use yew::{Callback, LocalServerRenderer};

    #[test]
    fn settings_lists_all_languages() {
        let props = SettingsPageProps {
            lang: Lang::En,
            theme: "light".into(),
            on_lang_change: Callback::noop(),
            on_toggle_theme: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SettingsPage>::with_props(props).render());
        for lang in Lang::all() {
            assert!(html.contains(lang.native_name()), "missing {}", lang.code());
        }
    }

    #[test]
    fn dark_theme_checks_the_toggle() {
        let props = SettingsPageProps {
            lang: Lang::En,
            theme: "dark".into(),
            on_lang_change: Callback::noop(),
            on_toggle_theme: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SettingsPage>::with_props(props).render());
        assert!(html.contains("checked"));
    }
}
