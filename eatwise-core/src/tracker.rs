//! Oil-usage log: entries, validation, and the weekly series behind the
//! tracker chart. Volatile state; reloading starts over from the demo
//! entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("oil type and quantity are required")]
    MissingField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OilKind {
    Mustard,
    Sunflower,
    Olive,
    Coconut,
    Groundnut,
    RiceBran,
}

impl OilKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mustard => "Mustard Oil",
            Self::Sunflower => "Sunflower Oil",
            Self::Olive => "Olive Oil",
            Self::Coconut => "Coconut Oil",
            Self::Groundnut => "Groundnut Oil",
            Self::RiceBran => "Rice Bran Oil",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Mustard,
            Self::Sunflower,
            Self::Olive,
            Self::Coconut,
            Self::Groundnut,
            Self::RiceBran,
        ]
    }
}

impl fmt::Display for OilKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OilKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OilEntry {
    pub id: u32,
    pub kind: OilKind,
    pub amount_ml: u32,
    pub date: String,
    pub time: String,
}

/// In-memory log of oil usage, newest entry first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerLog {
    entries: Vec<OilEntry>,
    next_id: u32,
}

impl Default for TrackerLog {
    fn default() -> Self {
        let entries = vec![
            OilEntry {
                id: 3,
                kind: OilKind::Mustard,
                amount_ml: 50,
                date: "2025-10-23".into(),
                time: "7:30 AM".into(),
            },
            OilEntry {
                id: 2,
                kind: OilKind::Sunflower,
                amount_ml: 75,
                date: "2025-10-22".into(),
                time: "8:15 PM".into(),
            },
            OilEntry {
                id: 1,
                kind: OilKind::Olive,
                amount_ml: 40,
                date: "2025-10-22".into(),
                time: "1:20 PM".into(),
            },
        ];
        Self {
            entries,
            next_id: 4,
        }
    }
}

impl TrackerLog {
    #[must_use]
    pub fn entries(&self) -> &[OilEntry] {
        &self.entries
    }

    /// Validate and prepend a new entry.
    ///
    /// # Errors
    /// `MissingField` when the oil type is absent or the quantity is
    /// zero or unparsable.
    pub fn log_entry(
        &mut self,
        kind: Option<OilKind>,
        quantity_ml: &str,
        date: &str,
        time: &str,
    ) -> Result<&OilEntry, TrackerError> {
        let kind = kind.ok_or(TrackerError::MissingField)?;
        let amount_ml: u32 = quantity_ml
            .trim()
            .parse()
            .ok()
            .filter(|ml| *ml > 0)
            .ok_or(TrackerError::MissingField)?;
        let entry = OilEntry {
            id: self.next_id,
            kind,
            amount_ml,
            date: date.to_string(),
            time: time.to_string(),
        };
        self.next_id += 1;
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    /// Total for the most recent logged date.
    #[must_use]
    pub fn today_total_ml(&self) -> u32 {
        let Some(latest) = self.entries.first().map(|e| e.date.clone()) else {
            return 0;
        };
        self.entries
            .iter()
            .filter(|e| e.date == latest)
            .map(|e| e.amount_ml)
            .sum()
    }

    #[must_use]
    pub fn total_ml(&self) -> u32 {
        self.entries.iter().map(|e| e.amount_ml).sum()
    }
}

/// Rotating health tips shown beside the log form.
pub const HEALTH_TIPS: [&str; 6] = [
    "Measure oil with a spoon instead of free pouring.",
    "Prefer steaming or grilling over deep frying.",
    "Reuse of frying oil raises trans fats; avoid a third reuse.",
    "Mustard and groundnut oils suit high-heat cooking.",
    "Drain fried food on a rack, not paper, to see the oil left behind.",
    "Track every meal; untracked tadkas add up fast.",
];

#[cfg(test)]
mod tests {
    use super::{OilKind, TrackerError, TrackerLog};
    use std::str::FromStr;

    #[test]
    fn log_entry_requires_kind_and_quantity() {
        let mut log = TrackerLog::default();
        let before = log.entries().len();
        assert_eq!(
            log.log_entry(None, "50", "2025-10-24", "9:00 AM"),
            Err(TrackerError::MissingField)
        );
        assert_eq!(
            log.log_entry(Some(OilKind::Olive), "", "2025-10-24", "9:00 AM"),
            Err(TrackerError::MissingField)
        );
        assert_eq!(
            log.log_entry(Some(OilKind::Olive), "0", "2025-10-24", "9:00 AM"),
            Err(TrackerError::MissingField)
        );
        assert_eq!(log.entries().len(), before);
    }

    #[test]
    fn log_entry_prepends_with_fresh_id() {
        let mut log = TrackerLog::default();
        let entry = log
            .log_entry(Some(OilKind::Coconut), "30", "2025-10-24", "9:00 AM")
            .unwrap();
        assert_eq!(entry.id, 4);
        assert_eq!(log.entries()[0].kind, OilKind::Coconut);
        let next = log
            .log_entry(Some(OilKind::Olive), "10", "2025-10-24", "10:00 AM")
            .unwrap();
        assert_eq!(next.id, 5);
    }

    #[test]
    fn today_total_sums_latest_date_only() {
        let log = TrackerLog::default();
        assert_eq!(log.today_total_ml(), 50);
        assert_eq!(log.total_ml(), 165);
    }

    #[test]
    fn oil_kind_parses_from_label() {
        for kind in OilKind::all() {
            assert_eq!(OilKind::from_str(kind.label()), Ok(kind));
        }
        assert!(OilKind::from_str("Snake Oil").is_err());
    }
}
