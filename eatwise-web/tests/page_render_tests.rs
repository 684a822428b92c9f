use eatwise_core::{MockData, Profile, TrackerLog};
use eatwise_web::i18n::Lang;
use eatwise_web::pages::{
    login::{LoginPage, LoginPageProps},
    not_found::{NotFoundPage, NotFoundProps},
    partner::audit::{AuditPage, AuditPageProps},
    policy::campaigns::{CampaignsPage, CampaignsPageProps},
    register::{RegisterPage, RegisterPageProps},
    user::home::{HomePage, HomePageProps},
    user::profile::{ProfilePage, ProfilePageProps},
    user::tracker::{TrackerPage, TrackerPageProps},
};
use eatwise_web::router::Route;
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};
use yew_router::Routable;

#[test]
fn login_page_lists_demo_credentials() {
    let props = LoginPageProps {
        lang: Lang::En,
        error: None,
        on_submit: Callback::noop(),
        on_reset_demo: Callback::noop(),
        on_go_register: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
    assert!(html.contains("rajesh.kumar@example.com"));
    assert!(html.contains("priya.partner@example.com"));
    assert!(html.contains("sanjay.policy@example.com"));
    assert!(html.contains("reset-demo"));
}

#[test]
fn login_page_surfaces_error_inline() {
    let props = LoginPageProps {
        lang: Lang::En,
        error: Some("incorrect password".into()),
        on_submit: Callback::noop(),
        on_reset_demo: Callback::noop(),
        on_go_register: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
    assert!(html.contains("incorrect password"));
    assert!(html.contains("role=\"alert\""));
}

#[test]
fn register_page_offers_all_roles() {
    let props = RegisterPageProps {
        lang: Lang::En,
        error: None,
        on_submit: Callback::noop(),
        on_go_login: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RegisterPage>::with_props(props).render());
    assert!(html.contains("value=\"user\""));
    assert!(html.contains("value=\"partner\""));
    assert!(html.contains("value=\"policymaker\""));
}

#[test]
fn not_found_page_renders_escape_hatch() {
    let props = NotFoundProps {
        lang: Lang::En,
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFoundPage>::with_props(props).render());
    assert!(html.contains("404"));
    assert!(html.contains("Back to home"));
}

#[test]
fn home_page_shows_totals_and_greeting() {
    let log = TrackerLog::default();
    let props = HomePageProps {
        lang: Lang::En,
        first_name: "Rajesh".into(),
        today_ml: log.today_total_ml(),
        month_total_ml: log.total_ml(),
        on_navigate: Callback::noop(),
        nudge_seed: 7,
        on_nudge: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Rajesh"));
    assert!(html.contains("50ml"));
    assert!(html.contains("awareness-carousel"));
}

#[test]
fn tracker_page_lists_seeded_entries() {
    let log = TrackerLog::default();
    let props = TrackerPageProps {
        lang: Lang::En,
        entries: log.entries().to_vec(),
        weekly: MockData::new(7).weekly_usage(),
        error: None,
        on_log: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TrackerPage>::with_props(props).render());
    assert!(html.contains("Mustard Oil"));
    assert!(html.contains("Sunflower Oil"));
    assert!(html.contains("<rect"));
}

#[test]
fn profile_page_renders_in_hindi() {
    let props = ProfilePageProps {
        lang: Lang::Hi,
        profile: Profile::seeded("Rajesh Kumar", "rajesh.kumar@example.com"),
        on_save: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProfilePage>::with_props(props).render());
    assert!(html.contains("प्रोफ़ाइल संपादित करें"));
}

#[test]
fn partner_audit_uses_seeded_scores() {
    let props = AuditPageProps {
        lang: Lang::En,
        scores: MockData::new(7).audit_scores(),
    };
    let html = block_on(LocalServerRenderer::<AuditPage>::with_props(props).render());
    assert!(html.contains("Oil reuse"));
    assert!(html.contains("/ 80"));
}

#[test]
fn policy_campaigns_render_seeded_list() {
    let props = CampaignsPageProps {
        lang: Lang::En,
        seeds: MockData::new(7).campaigns(),
    };
    let html = block_on(LocalServerRenderer::<CampaignsPage>::with_props(props).render());
    assert!(html.contains("Less Oil Pledge"));
    assert!(html.contains("Maharashtra"));
}

#[test]
fn role_landing_routes_differ_per_role() {
    use eatwise_core::Role;
    assert_eq!(Route::landing_for(Role::EndUser).to_path(), "/");
    assert_eq!(
        Route::landing_for(Role::Partner).to_path(),
        "/partner-dashboard"
    );
    assert_eq!(
        Route::landing_for(Role::PolicyMaker).to_path(),
        "/policy-dashboard"
    );
}
