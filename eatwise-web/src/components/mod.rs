pub mod bottom_nav;
pub mod chart;
pub mod guard;
pub mod header;
pub mod layout;
pub mod ui;
