pub mod audit;
pub mod certification;
pub mod menu;
pub mod overview;
