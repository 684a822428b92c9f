use crate::components::ui::Card;
use crate::i18n::{Lang, tr};
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuItem {
    name: String,
    oil_ml: u32,
}

fn seed_menu() -> Vec<MenuItem> {
    [
        ("Steamed Idli Platter", 5),
        ("Grilled Paneer Tikka", 12),
        ("Millet Khichdi", 8),
        ("Tandoori Roti Thali", 10),
    ]
    .into_iter()
    .map(|(name, oil_ml)| MenuItem {
        name: name.to_string(),
        oil_ml,
    })
    .collect()
}

#[derive(Properties, Clone, PartialEq)]
pub struct MenuPageProps {
    pub lang: Lang,
}

/// Menu manager with in-memory add and remove. Edits reset on reload.
#[function_component(MenuPage)]
pub fn menu_page(props: &MenuPageProps) -> Html {
    let items = use_state(seed_menu);
    let name = use_state(String::new);
    let oil = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_oil = {
        let oil = oil.clone();
        Callback::from(move |e: InputEvent| {
            oil.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let add = {
        let items = items.clone();
        let name = name.clone();
        let oil = oil.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = name.trim().to_string();
            let Ok(oil_ml) = oil.parse::<u32>() else {
                return;
            };
            if trimmed.is_empty() {
                return;
            }
            let mut next = (*items).clone();
            next.push(MenuItem {
                name: trimmed,
                oil_ml,
            });
            items.set(next);
            name.set(String::new());
            oil.set(String::new());
        })
    };

    html! {
        <div class="space-y-4" data-testid="menu-screen">
            <h1 class="text-2xl font-bold">
                { tr(props.lang, "menu.title", &[(Lang::En, "Menu Manager"), (Lang::Hi, "मेन्यू प्रबंधक")]) }
            </h1>
            <Card title={tr(props.lang, "menu.add", &[(Lang::En, "Add Dish"), (Lang::Hi, "व्यंजन जोड़ें")])}>
                <form onsubmit={add} class="flex gap-2">
                    <input class="input input-bordered input-sm flex-1" value={(*name).clone()}
                           oninput={on_name} data-testid="menu-name"
                           placeholder={tr(props.lang, "menu.dish", &[(Lang::En, "Dish name"), (Lang::Hi, "व्यंजन का नाम")])} />
                    <input class="input input-bordered input-sm w-24" type="number" min="0"
                           value={(*oil).clone()} oninput={on_oil} data-testid="menu-oil"
                           placeholder={tr(props.lang, "menu.oil", &[(Lang::En, "Oil ml"), (Lang::Hi, "तेल ml")])} />
                    <button type="submit" class="btn btn-primary btn-sm">{"+"}</button>
                </form>
            </Card>
            <Card title={tr(props.lang, "menu.items", &[(Lang::En, "Dishes"), (Lang::Hi, "व्यंजन")])}>
                <ul class="space-y-2" data-testid="menu-list">
                    { for items.iter().enumerate().map(|(i, item)| {
                        let remove = {
                            let items = items.clone();
                            Callback::from(move |_| {
                                let mut next = (*items).clone();
                                next.remove(i);
                                items.set(next);
                            })
                        };
                        let badge = if item.oil_ml <= 10 {
                            "badge badge-success badge-sm"
                        } else {
                            "badge badge-warning badge-sm"
                        };
                        html! {
                            <li class="flex items-center justify-between gap-2">
                                <span class="text-sm flex-1">{ item.name.clone() }</span>
                                <span class={badge}>{ format!("{}ml", item.oil_ml) }</span>
                                <button class="btn btn-ghost btn-xs" onclick={remove}>{"✕"}</button>
                            </li>
                        }
                    }) }
                </ul>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuPage, MenuPageProps};
    use crate::i18n::Lang;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn menu_renders_seeded_dishes() {
        let props = MenuPageProps { lang: Lang::En };
        let html = block_on(LocalServerRenderer::<MenuPage>::with_props(props).render());
        assert!(html.contains("Steamed Idli Platter"));
        assert!(html.contains("5ml"));
        assert!(html.contains("menu-list"));
    }
}
