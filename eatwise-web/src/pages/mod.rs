pub mod login;
pub mod not_found;
pub mod partner;
pub mod policy;
pub mod register;
pub mod user;
