//! Route dispatch: builds the page for the current route and wires the
//! shared state into page callbacks. Pages stay presentational; every
//! mutation lives here.

use crate::app::state::AppState;
use crate::components::guard::RequireAuth;
use crate::components::layout::{PartnerLayout, PolicyLayout, UserLayout};
use crate::components::ui::Toast;
use crate::pages;
use crate::pages::user::learn::ChatLine;
use crate::router::Route;
use eatwise_core::{Account, MockData, OilKind, ProfilePatch, Role, coach_reply, rewards};
use yew::prelude::*;

pub fn render_route(state: &AppState, route: Route, navigate: &Callback<Route>) -> Html {
    match route {
        Route::Login => login_view(state, navigate),
        Route::Register => register_view(state, navigate),
        Route::NotFound => not_found_view(state, navigate),
        Route::PartnerDashboard
        | Route::PartnerCertification
        | Route::PartnerAudit
        | Route::PartnerMenu => partner_view(state, &route, navigate),
        Route::PolicyDashboard
        | Route::PolicyAnalytics
        | Route::PolicyReports
        | Route::PolicyInsights
        | Route::PolicyCampaigns => policy_view(state, &route, navigate),
        _ => user_view(state, &route, navigate),
    }
}

fn toggle_theme(state: &AppState) -> Callback<()> {
    let theme = state.theme.clone();
    Callback::from(move |()| {
        let next = if *theme == "dark" { "light" } else { "dark" };
        theme.set(AttrValue::from(next));
    })
}

fn logout(state: &AppState, navigate: &Callback<Route>) -> Callback<()> {
    let auth = state.auth.clone();
    let navigate = navigate.clone();
    Callback::from(move |()| {
        let mut next = (*auth).clone();
        next.logout();
        auth.set(next);
        navigate.emit(Route::Login);
    })
}

fn dismiss_toast(state: &AppState) -> Callback<()> {
    let toast = state.toast.clone();
    Callback::from(move |()| toast.set(None))
}

fn show_toast(state: &AppState) -> Callback<String> {
    let toast = state.toast.clone();
    Callback::from(move |message: String| toast.set(Some(AttrValue::from(message))))
}

fn login_view(state: &AppState, navigate: &Callback<Route>) -> Html {
    let on_submit = {
        let state = state.clone();
        let navigate = navigate.clone();
        Callback::from(move |(email, password): (String, String)| {
            let mut next = (*state.auth).clone();
            match next.login(&email, &password) {
                Ok(identity) => {
                    state.login_error.set(None);
                    state.reset_session_data();
                    state.auth.set(next);
                    navigate.emit(Route::landing_for(identity.role));
                }
                Err(err) => {
                    state.login_error.set(Some(AttrValue::from(err.to_string())));
                }
            }
        })
    };
    let on_reset_demo = {
        let auth = state.auth.clone();
        let toast = state.toast.clone();
        Callback::from(move |()| {
            let mut next = (*auth).clone();
            next.seed_demo_users();
            auth.set(next);
            toast.set(Some(AttrValue::from("Demo users restored")));
        })
    };
    let on_go_register = {
        let navigate = navigate.clone();
        Callback::from(move |()| navigate.emit(Route::Register))
    };

    html! {
        <>
            <pages::login::LoginPage
                lang={*state.lang}
                error={(*state.login_error).clone()}
                {on_submit}
                {on_reset_demo}
                {on_go_register}
            />
            <Toast message={(*state.toast).clone()} on_dismiss={dismiss_toast(state)} />
        </>
    }
}

fn register_view(state: &AppState, navigate: &Callback<Route>) -> Html {
    let on_submit = {
        let state = state.clone();
        let navigate = navigate.clone();
        Callback::from(move |account: Account| {
            let mut next = (*state.auth).clone();
            match next.register(account) {
                Ok(identity) => {
                    state.register_error.set(None);
                    state.reset_session_data();
                    state.auth.set(next);
                    navigate.emit(Route::landing_for(identity.role));
                }
                Err(err) => {
                    state
                        .register_error
                        .set(Some(AttrValue::from(err.to_string())));
                }
            }
        })
    };
    let on_go_login = {
        let navigate = navigate.clone();
        Callback::from(move |()| navigate.emit(Route::Login))
    };

    html! {
        <pages::register::RegisterPage
            lang={*state.lang}
            error={(*state.register_error).clone()}
            {on_submit}
            {on_go_login}
        />
    }
}

fn not_found_view(state: &AppState, navigate: &Callback<Route>) -> Html {
    let on_go_home = {
        let navigate = navigate.clone();
        Callback::from(move |()| navigate.emit(Route::Home))
    };
    html! { <pages::not_found::NotFoundPage lang={*state.lang} {on_go_home} /> }
}

fn require_login(navigate: &Callback<Route>) -> Callback<()> {
    let navigate = navigate.clone();
    Callback::from(move |()| navigate.emit(Route::Login))
}

fn session_role(state: &AppState) -> Role {
    state
        .auth
        .session()
        .map_or(Role::EndUser, |identity| identity.role)
}

fn user_view(state: &AppState, route: &Route, navigate: &Callback<Route>) -> Html {
    let content = user_content(state, route, navigate);
    html! {
        <RequireAuth
            authed={state.auth.is_authenticated()}
            on_unauthenticated={require_login(navigate)}
        >
            <UserLayout
                lang={*state.lang}
                theme={(*state.theme).clone()}
                active={route.clone()}
                on_navigate={navigate.clone()}
                on_toggle_theme={toggle_theme(state)}
                on_logout={logout(state, navigate)}
            >
                { content }
                <Toast message={(*state.toast).clone()} on_dismiss={dismiss_toast(state)} />
            </UserLayout>
        </RequireAuth>
    }
}

fn user_content(state: &AppState, route: &Route, navigate: &Callback<Route>) -> Html {
    let lang = *state.lang;
    let seed = *state.data_seed;
    match route {
        Route::Home => {
            let first_name = state
                .auth
                .profile()
                .and_then(|p| p.name.split_whitespace().next())
                .unwrap_or("there")
                .to_string();
            html! {
                <pages::user::home::HomePage
                    {lang}
                    first_name={first_name}
                    today_ml={state.tracker.today_total_ml()}
                    month_total_ml={state.tracker.total_ml()}
                    on_navigate={navigate.clone()}
                    nudge_seed={seed}
                    on_nudge={show_toast(state)}
                />
            }
        }
        Route::Tracker => {
            let on_log = {
                let tracker = state.tracker.clone();
                let error = state.tracker_error.clone();
                let toast = state.toast.clone();
                Callback::from(
                    move |(kind, quantity, date): (Option<OilKind>, String, String)| {
                        let mut next = (*tracker).clone();
                        match next.log_entry(kind, &quantity, &date, &current_time_label()) {
                            Ok(entry) => {
                                let message = format!("Logged {}ml", entry.amount_ml);
                                error.set(None);
                                tracker.set(next);
                                toast.set(Some(AttrValue::from(message)));
                            }
                            Err(err) => error.set(Some(AttrValue::from(err.to_string()))),
                        }
                    },
                )
            };
            html! {
                <pages::user::tracker::TrackerPage
                    {lang}
                    entries={state.tracker.entries().to_vec()}
                    weekly={MockData::new(seed).weekly_usage()}
                    error={(*state.tracker_error).clone()}
                    {on_log}
                />
            }
        }
        Route::Rewards => {
            let on_claim = {
                let points = state.points.clone();
                let toast = state.toast.clone();
                Callback::from(move |id: String| {
                    let mut ledger = (*points).clone();
                    match rewards::claim_bonus(&mut ledger, &id) {
                        Ok(granted) => {
                            points.set(ledger);
                            toast.set(Some(AttrValue::from(format!("+{granted} points"))));
                        }
                        Err(err) => toast.set(Some(AttrValue::from(err.to_string()))),
                    }
                })
            };
            let on_redeem = {
                let points = state.points.clone();
                let toast = state.toast.clone();
                Callback::from(move |id: String| {
                    let mut ledger = (*points).clone();
                    match rewards::redeem(&mut ledger, &id) {
                        Ok(cost) => {
                            points.set(ledger);
                            toast.set(Some(AttrValue::from(format!("Redeemed for {cost} points"))));
                        }
                        Err(err) => toast.set(Some(AttrValue::from(err.to_string()))),
                    }
                })
            };
            html! {
                <pages::user::rewards::RewardsPage
                    {lang}
                    balance={state.points.balance()}
                    {on_claim}
                    {on_redeem}
                />
            }
        }
        Route::Leaderboard => html! {
            <pages::user::leaderboard::LeaderboardPage
                {lang}
                rows={MockData::new(seed).leaderboard()}
            />
        },
        Route::Community => html! {
            <pages::user::community::CommunityPage
                {lang}
                posts={MockData::new(seed).community_feed()}
            />
        },
        Route::Partnerships => html! {
            <pages::user::partnerships::PartnershipsPage {lang} />
        },
        Route::Learn => learn_content(state),
        Route::Profile => {
            let profile = state.auth.profile().cloned().unwrap_or_default();
            let on_save = {
                let auth = state.auth.clone();
                let toast = state.toast.clone();
                Callback::from(move |patch: ProfilePatch| {
                    let mut next = (*auth).clone();
                    next.update_profile(patch);
                    auth.set(next);
                    toast.set(Some(AttrValue::from("Profile updated")));
                })
            };
            html! { <pages::user::profile::ProfilePage {lang} {profile} {on_save} /> }
        }
        Route::Settings => {
            let on_lang_change = {
                let lang_handle = state.lang.clone();
                Callback::from(move |lang: crate::i18n::Lang| lang_handle.set(lang))
            };
            html! {
                <pages::user::settings::SettingsPage
                    {lang}
                    theme={(*state.theme).clone()}
                    {on_lang_change}
                    on_toggle_theme={toggle_theme(state)}
                />
            }
        }
        Route::About => html! { <pages::user::about::AboutPage {lang} /> },
        Route::Help => html! { <pages::user::help::HelpPage {lang} /> },
        _ => Html::default(),
    }
}

fn learn_content(state: &AppState) -> Html {
    let on_analyze = {
        let analyzing = state.analyzing.clone();
        let verdict = state.verdict.clone();
        let seed = *state.data_seed;
        Callback::from(move |()| {
            if *analyzing {
                return;
            }
            analyzing.set(true);
            #[cfg(target_arch = "wasm32")]
            {
                let analyzing = analyzing.clone();
                let verdict = verdict.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = crate::dom::sleep_ms(1200).await;
                    verdict.set(Some(MockData::new(seed).analyzer_verdict()));
                    analyzing.set(false);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                verdict.set(Some(MockData::new(seed).analyzer_verdict()));
                analyzing.set(false);
            }
        })
    };
    let on_send = {
        let chat = state.chat.clone();
        Callback::from(move |text: String| {
            let mut log = (*chat).clone();
            let turn = log.iter().filter(|line| line.from_user).count();
            log.push(ChatLine {
                from_user: true,
                text,
            });
            let reply = coach_reply(turn).to_string();
            #[cfg(target_arch = "wasm32")]
            {
                chat.set(log);
                let chat = chat.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let _ = crate::dom::sleep_ms(600).await;
                    let mut log = (*chat).clone();
                    log.push(ChatLine {
                        from_user: false,
                        text: reply,
                    });
                    chat.set(log);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                log.push(ChatLine {
                    from_user: false,
                    text: reply,
                });
                chat.set(log);
            }
        })
    };

    html! {
        <pages::user::learn::LearnPage
            lang={*state.lang}
            analyzing={*state.analyzing}
            verdict={(*state.verdict).clone()}
            {on_analyze}
            chat={(*state.chat).clone()}
            {on_send}
        />
    }
}

fn partner_view(state: &AppState, route: &Route, navigate: &Callback<Route>) -> Html {
    let lang = *state.lang;
    let seed = *state.data_seed;
    let content = match route {
        Route::PartnerDashboard => {
            let partner_name = state
                .auth
                .session()
                .map_or_else(|| "Partner".to_string(), |s| s.name.clone());
            html! {
                <pages::partner::overview::PartnerOverviewPage
                    {lang}
                    partner_name={partner_name}
                    weekly_covers={MockData::new(seed).weekly_usage()}
                />
            }
        }
        Route::PartnerCertification => html! {
            <pages::partner::certification::CertificationPage {lang} />
        },
        Route::PartnerAudit => html! {
            <pages::partner::audit::AuditPage
                {lang}
                scores={MockData::new(seed).audit_scores()}
            />
        },
        Route::PartnerMenu => html! { <pages::partner::menu::MenuPage {lang} /> },
        _ => Html::default(),
    };
    html! {
        <RequireAuth
            authed={state.auth.is_authenticated()}
            on_unauthenticated={require_login(navigate)}
        >
            <PartnerLayout
                {lang}
                theme={(*state.theme).clone()}
                active={route.clone()}
                role={session_role(state)}
                on_navigate={navigate.clone()}
                on_toggle_theme={toggle_theme(state)}
                on_logout={logout(state, navigate)}
            >
                { content }
                <Toast message={(*state.toast).clone()} on_dismiss={dismiss_toast(state)} />
            </PartnerLayout>
        </RequireAuth>
    }
}

fn policy_view(state: &AppState, route: &Route, navigate: &Callback<Route>) -> Html {
    let lang = *state.lang;
    let seed = *state.data_seed;
    let content = match route {
        Route::PolicyDashboard => {
            let mut data = MockData::new(seed);
            html! {
                <pages::policy::dashboard::PolicyDashboardPage
                    {lang}
                    trend={data.monthly_trend()}
                    share={data.oil_share()}
                />
            }
        }
        Route::PolicyAnalytics => {
            let mut data = MockData::new(seed);
            html! {
                <pages::policy::analytics::AnalyticsPage
                    {lang}
                    trend={data.monthly_trend()}
                    regional={data.weekly_usage()}
                />
            }
        }
        Route::PolicyReports => html! { <pages::policy::reports::ReportsPage {lang} /> },
        Route::PolicyInsights => html! { <pages::policy::insights::InsightsPage {lang} /> },
        Route::PolicyCampaigns => html! {
            <pages::policy::campaigns::CampaignsPage
                {lang}
                seeds={MockData::new(seed).campaigns()}
            />
        },
        _ => Html::default(),
    };
    html! {
        <RequireAuth
            authed={state.auth.is_authenticated()}
            on_unauthenticated={require_login(navigate)}
        >
            <PolicyLayout
                {lang}
                theme={(*state.theme).clone()}
                active={route.clone()}
                role={session_role(state)}
                on_navigate={navigate.clone()}
                on_toggle_theme={toggle_theme(state)}
                on_logout={logout(state, navigate)}
            >
                { content }
                <Toast message={(*state.toast).clone()} on_dismiss={dismiss_toast(state)} />
            </PolicyLayout>
        </RequireAuth>
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time_label() -> String {
    let now = js_sys::Date::new_0();
    let hours = now.get_hours();
    let minutes = now.get_minutes();
    let (display, suffix) = match hours {
        0 => (12, "AM"),
        1..=11 => (hours, "AM"),
        12 => (12, "PM"),
        _ => (hours - 12, "PM"),
    };
    format!("{display}:{minutes:02} {suffix}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time_label() -> String {
    "9:00 AM".to_string()
}
