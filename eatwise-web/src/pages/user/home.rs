use crate::components::ui::{Card, Stat};
use crate::i18n::{Lang, tr};
use crate::router::Route;
use yew::prelude::*;

const AWARENESS_MESSAGES: [&str; 4] = [
    "Cut down oil, lift up health 💪",
    "Try mustard oil instead of palm oil 🌿",
    "Small changes, big health benefits 🌟",
    "Your heart thanks you for less oil ❤️",
];

#[cfg(target_arch = "wasm32")]
const NUDGES: [&str; 3] = [
    "Haven't logged today's cooking yet?",
    "A measured spoon beats a free pour.",
    "Check the leaderboard — you're close to a rank up!",
];

#[cfg(target_arch = "wasm32")]
const NUDGE_INTERVAL_MS: i32 = 30_000;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub lang: Lang,
    pub first_name: AttrValue,
    pub today_ml: u32,
    pub month_total_ml: u32,
    pub on_navigate: Callback<Route>,
    /// Seed for the probabilistic nudge timer.
    pub nudge_seed: u64,
    pub on_nudge: Callback<String>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let slide = use_state(|| 0_usize);

    // Periodic nudges; the roll is deterministic per seed. Teardown
    // clears the pending timer.
    #[cfg(target_arch = "wasm32")]
    {
        use eatwise_core::MockData;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let on_nudge = props.on_nudge.clone();
        let seed = props.nudge_seed;
        use_effect_with((), move |()| {
            let mut mock = MockData::new(seed);
            let mut turn = 0_usize;
            let closure = Closure::<dyn FnMut()>::new(move || {
                if mock.nudge_fires(0.3) {
                    on_nudge.emit(NUDGES[turn % NUDGES.len()].to_string());
                    turn += 1;
                }
            });
            let handle = crate::dom::window()
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    NUDGE_INTERVAL_MS,
                )
                .ok();
            move || {
                if let Some(handle) = handle {
                    crate::dom::window().clear_interval_with_handle(handle);
                }
                drop(closure);
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (&props.on_nudge, props.nudge_seed);
    }

    let prev = {
        let slide = slide.clone();
        Callback::from(move |_| {
            slide.set((*slide + AWARENESS_MESSAGES.len() - 1) % AWARENESS_MESSAGES.len());
        })
    };
    let next = {
        let slide = slide.clone();
        Callback::from(move |_| slide.set((*slide + 1) % AWARENESS_MESSAGES.len()))
    };
    let go_tracker = {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Tracker))
    };
    let go_learn = {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Learn))
    };

    html! {
        <div class="space-y-6" data-testid="home-screen">
            <div class="relative" data-testid="awareness-carousel">
                <Card class={classes!("text-center")}>
                    <p class="text-lg font-semibold">{ AWARENESS_MESSAGES[*slide] }</p>
                </Card>
                <button class="btn btn-circle btn-xs absolute left-1 top-1/2" onclick={prev} aria-label="Previous">{"❮"}</button>
                <button class="btn btn-circle btn-xs absolute right-1 top-1/2" onclick={next} aria-label="Next">{"❯"}</button>
            </div>

            <Card>
                <p class="text-sm text-base-content/60">
                    { tr(props.lang, "home.today", &[(Lang::En, "Today's Summary"), (Lang::Hi, "आज का सारांश")]) }
                </p>
                <p class="text-3xl font-bold">{ format!("{}ml", props.today_ml) }</p>
                <p class="text-sm text-base-content/60">
                    { tr(props.lang, "home.oil_so_far", &[(Lang::En, "Oil used so far"), (Lang::Hi, "अब तक उपयोग किया गया तेल")]) }
                </p>
            </Card>

            <div class="space-y-1">
                <h1 class="text-3xl font-bold">
                    { tr(props.lang, "home.welcome", &[(Lang::En, "Welcome"), (Lang::Hi, "स्वागत है")]) }
                    {" "}{ props.first_name.clone() }{" 👋"}
                </h1>
                <p class="text-base-content/60">
                    { tr(props.lang, "home.tagline", &[(Lang::En, "Track your healthy oil usage and earn rewards!"), (Lang::Hi, "अपने तेल उपयोग को ट्रैक करें और इनाम पाएँ!")]) }
                </p>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <Stat
                    label={tr(props.lang, "home.month", &[(Lang::En, "This Month"), (Lang::Hi, "इस महीने")])}
                    value={format!("{:.1}L", f64::from(props.month_total_ml) / 1000.0)}
                    hint={"Oil used"}
                />
                <Stat label="Goal" value="3L" hint="monthly target" />
            </div>

            <div class="space-y-3">
                <h2 class="text-lg font-semibold">
                    { tr(props.lang, "home.quick", &[(Lang::En, "Quick Actions"), (Lang::Hi, "त्वरित क्रियाएँ")]) }
                </h2>
                <div class="grid grid-cols-2 gap-3">
                    <button class="btn btn-outline" onclick={go_tracker} data-testid="quick-log">
                        { tr(props.lang, "home.log_usage", &[(Lang::En, "Log Usage"), (Lang::Hi, "उपयोग दर्ज करें")]) }
                    </button>
                    <button class="btn btn-outline" onclick={go_learn} data-testid="quick-tips">
                        { tr(props.lang, "home.view_tips", &[(Lang::En, "View Tips"), (Lang::Hi, "सुझाव देखें")]) }
                    </button>
                </div>
            </div>
        </div>
    }
}
