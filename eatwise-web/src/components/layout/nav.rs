//! Destination lists for the three shells.

use crate::components::bottom_nav::NavItem;
use crate::i18n::{Lang, tr};
use crate::router::Route;

pub fn user_nav(lang: Lang) -> Vec<NavItem> {
    vec![
        NavItem::new(
            "🏠",
            tr(lang, "nav.home", &[(Lang::En, "Home"), (Lang::Hi, "होम")]),
            Route::Home,
        ),
        NavItem::new(
            "💧",
            tr(
                lang,
                "nav.tracker",
                &[(Lang::En, "Tracker"), (Lang::Hi, "ट्रैकर")],
            ),
            Route::Tracker,
        ),
        NavItem::new(
            "🎁",
            tr(
                lang,
                "nav.rewards",
                &[(Lang::En, "Rewards"), (Lang::Hi, "इनाम")],
            ),
            Route::Rewards,
        ),
        NavItem::new(
            "🏆",
            tr(
                lang,
                "nav.leaderboard",
                &[(Lang::En, "Ranks"), (Lang::Hi, "रैंक")],
            ),
            Route::Leaderboard,
        ),
        NavItem::new(
            "👤",
            tr(
                lang,
                "nav.profile",
                &[(Lang::En, "Profile"), (Lang::Hi, "प्रोफ़ाइल")],
            ),
            Route::Profile,
        ),
    ]
}

/// Secondary destinations in the end-user drawer menu.
pub fn user_menu(lang: Lang) -> Vec<(String, Route)> {
    vec![
        (
            tr(
                lang,
                "menu.community",
                &[(Lang::En, "Community"), (Lang::Hi, "समुदाय")],
            ),
            Route::Community,
        ),
        (
            tr(
                lang,
                "menu.partnerships",
                &[(Lang::En, "Partnerships"), (Lang::Hi, "साझेदारियाँ")],
            ),
            Route::Partnerships,
        ),
        (
            tr(
                lang,
                "menu.learn",
                &[(Lang::En, "Learn"), (Lang::Hi, "सीखें")],
            ),
            Route::Learn,
        ),
        (
            tr(
                lang,
                "menu.settings",
                &[(Lang::En, "Settings"), (Lang::Hi, "सेटिंग्स")],
            ),
            Route::Settings,
        ),
        (
            tr(
                lang,
                "menu.about",
                &[(Lang::En, "About"), (Lang::Hi, "परिचय")],
            ),
            Route::About,
        ),
        (
            tr(
                lang,
                "menu.help",
                &[(Lang::En, "Help"), (Lang::Hi, "सहायता")],
            ),
            Route::Help,
        ),
    ]
}

pub fn partner_nav(lang: Lang) -> Vec<NavItem> {
    vec![
        NavItem::new(
            "🏠",
            tr(
                lang,
                "nav.overview",
                &[(Lang::En, "Overview"), (Lang::Hi, "सारांश")],
            ),
            Route::PartnerDashboard,
        ),
        NavItem::new(
            "✅",
            tr(
                lang,
                "nav.certification",
                &[(Lang::En, "Certification"), (Lang::Hi, "प्रमाणन")],
            ),
            Route::PartnerCertification,
        ),
        NavItem::new(
            "📊",
            tr(
                lang,
                "nav.audit",
                &[(Lang::En, "Audit"), (Lang::Hi, "ऑडिट")],
            ),
            Route::PartnerAudit,
        ),
        NavItem::new(
            "🍽️",
            tr(lang, "nav.menu", &[(Lang::En, "Menu"), (Lang::Hi, "मेनू")]),
            Route::PartnerMenu,
        ),
    ]
}

pub fn policy_nav(lang: Lang) -> Vec<NavItem> {
    vec![
        NavItem::new(
            "📊",
            tr(
                lang,
                "nav.dashboard",
                &[(Lang::En, "Dashboard"), (Lang::Hi, "डैशबोर्ड")],
            ),
            Route::PolicyDashboard,
        ),
        NavItem::new(
            "📈",
            tr(
                lang,
                "nav.analytics",
                &[(Lang::En, "Analytics"), (Lang::Hi, "विश्लेषण")],
            ),
            Route::PolicyAnalytics,
        ),
        NavItem::new(
            "📄",
            tr(
                lang,
                "nav.reports",
                &[(Lang::En, "Reports"), (Lang::Hi, "रिपोर्ट")],
            ),
            Route::PolicyReports,
        ),
        NavItem::new(
            "💡",
            tr(
                lang,
                "nav.insights",
                &[(Lang::En, "Insights"), (Lang::Hi, "अंतर्दृष्टि")],
            ),
            Route::PolicyInsights,
        ),
        NavItem::new(
            "🎯",
            tr(
                lang,
                "nav.campaigns",
                &[(Lang::En, "Campaigns"), (Lang::Hi, "अभियान")],
            ),
            Route::PolicyCampaigns,
        ),
    ]
}
