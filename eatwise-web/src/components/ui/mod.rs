//! Presentational primitives shared across pages.

pub mod accordion;
pub mod card;
pub mod foundation;
pub mod progress;
pub mod stat;
pub mod toast;

pub use accordion::{Accordion, AccordionItem};
pub use card::Card;
pub use progress::Progress;
pub use stat::Stat;
pub use toast::Toast;
