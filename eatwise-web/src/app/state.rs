use crate::i18n::{self, Lang};
use crate::pages::user::learn::ChatLine;
use eatwise_core::{AnalyzerVerdict, AuthStore, PointsLedger, TrackerLog};
use yew::prelude::*;

/// Fixed seed for the sample datasets; every session sees the same
/// charts and leaderboard.
const DATA_SEED: u64 = 7;

#[derive(Clone)]
pub struct AppState {
    pub auth: UseStateHandle<AuthStore>,
    pub points: UseStateHandle<PointsLedger>,
    pub tracker: UseStateHandle<TrackerLog>,
    pub lang: UseStateHandle<Lang>,
    pub theme: UseStateHandle<AttrValue>,
    pub toast: UseStateHandle<Option<AttrValue>>,
    pub login_error: UseStateHandle<Option<AttrValue>>,
    pub register_error: UseStateHandle<Option<AttrValue>>,
    pub tracker_error: UseStateHandle<Option<AttrValue>>,
    pub analyzing: UseStateHandle<bool>,
    pub verdict: UseStateHandle<Option<AnalyzerVerdict>>,
    pub chat: UseStateHandle<Vec<ChatLine>>,
    pub data_seed: UseStateHandle<u64>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        auth: use_state(AuthStore::default),
        points: use_state(PointsLedger::default),
        tracker: use_state(TrackerLog::default),
        lang: use_state(i18n::load_saved),
        theme: use_state(|| AttrValue::from("light")),
        toast: use_state(|| None),
        login_error: use_state(|| None),
        register_error: use_state(|| None),
        tracker_error: use_state(|| None),
        analyzing: use_state(|| false),
        verdict: use_state(|| None),
        chat: use_state(|| {
            vec![ChatLine {
                from_user: false,
                text: "Hi! I'm your oil coach. Ask me anything about cooking with less oil."
                    .to_string(),
            }]
        }),
        data_seed: use_state(|| DATA_SEED),
    }
}

impl AppState {
    /// Reset the per-session stores to their seeded values. Called when
    /// a new session is established.
    pub fn reset_session_data(&self) {
        self.points.set(PointsLedger::default());
        self.tracker.set(TrackerLog::default());
        self.tracker_error.set(None);
        self.analyzing.set(false);
        self.verdict.set(None);
        self.toast.set(None);
    }
}
