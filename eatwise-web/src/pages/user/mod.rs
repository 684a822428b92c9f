pub mod about;
pub mod community;
pub mod help;
pub mod home;
pub mod leaderboard;
pub mod learn;
pub mod partnerships;
pub mod profile;
pub mod rewards;
pub mod settings;
pub mod tracker;
