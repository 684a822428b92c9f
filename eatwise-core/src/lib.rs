//! EatWise Core
//!
//! Platform-agnostic domain state for the EatWise / HealthyOil app.
//! This crate holds the session, points, tracker, rewards, and mock
//! dataset logic without any UI or browser dependencies.

pub mod auth;
pub mod mock;
pub mod points;
pub mod profile;
pub mod rewards;
pub mod role;
pub mod tracker;

// Re-export commonly used types
pub use auth::{Account, AuthError, AuthStore, SessionIdentity};
pub use mock::{
    AnalyzerVerdict, AuditScore, CampaignSeed, CommunityPost, DataPoint, LeaderboardRow, MockData,
    coach_reply,
};
pub use points::PointsLedger;
pub use profile::{Gender, Profile, ProfilePatch, generate_avatar};
pub use rewards::{Reward, RewardError, RewardKind, catalog, claim_bonus, redeem};
pub use role::Role;
pub use tracker::{OilEntry, OilKind, TrackerError, TrackerLog};
