pub mod analytics;
pub mod campaigns;
pub mod dashboard;
pub mod insights;
pub mod reports;
