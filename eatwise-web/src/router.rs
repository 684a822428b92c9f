use eatwise_core::Role;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tracker")]
    Tracker,
    #[at("/rewards")]
    Rewards,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/community")]
    Community,
    #[at("/partnerships")]
    Partnerships,
    #[at("/learn")]
    Learn,
    #[at("/profile")]
    Profile,
    #[at("/settings")]
    Settings,
    #[at("/about")]
    About,
    #[at("/help")]
    Help,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/partner-dashboard")]
    PartnerDashboard,
    #[at("/partner-certification")]
    PartnerCertification,
    #[at("/partner-audit-dashboard")]
    PartnerAudit,
    #[at("/partner-menu")]
    PartnerMenu,
    #[at("/policy-dashboard")]
    PolicyDashboard,
    #[at("/policy-analytics")]
    PolicyAnalytics,
    #[at("/policy-reports")]
    PolicyReports,
    #[at("/policy-insights")]
    PolicyInsights,
    #[at("/policy-campaigns")]
    PolicyCampaigns,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Where a freshly authenticated session lands, by role.
    #[must_use]
    pub const fn landing_for(role: Role) -> Self {
        match role {
            Role::EndUser => Self::Home,
            Role::Partner => Self::PartnerDashboard,
            Role::PolicyMaker => Self::PolicyDashboard,
        }
    }

    /// Routes reachable without a session identity.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Register | Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use eatwise_core::Role;
    use yew_router::Routable;

    #[test]
    fn routes_round_trip_through_paths() {
        let routes = [
            Route::Home,
            Route::Tracker,
            Route::Rewards,
            Route::Leaderboard,
            Route::Community,
            Route::Partnerships,
            Route::Learn,
            Route::Profile,
            Route::Settings,
            Route::About,
            Route::Help,
            Route::Login,
            Route::Register,
            Route::PartnerDashboard,
            Route::PartnerCertification,
            Route::PartnerAudit,
            Route::PartnerMenu,
            Route::PolicyDashboard,
            Route::PolicyAnalytics,
            Route::PolicyReports,
            Route::PolicyInsights,
            Route::PolicyCampaigns,
            Route::NotFound,
        ];
        for route in routes {
            let path = route.to_path();
            assert_eq!(Route::recognize(&path), Some(route));
        }
    }

    #[test]
    fn unknown_path_falls_through_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn landing_route_matches_role() {
        assert_eq!(Route::landing_for(Role::EndUser), Route::Home);
        assert_eq!(Route::landing_for(Role::Partner), Route::PartnerDashboard);
        assert_eq!(
            Route::landing_for(Role::PolicyMaker),
            Route::PolicyDashboard
        );
    }

    #[test]
    fn only_auth_pages_are_public() {
        assert!(Route::Login.is_public());
        assert!(Route::Register.is_public());
        assert!(Route::NotFound.is_public());
        assert!(!Route::Home.is_public());
        assert!(!Route::PartnerDashboard.is_public());
    }
}
