//! Deterministic sample datasets for the dashboards.
//!
//! Every generator draws from an explicitly seeded [`SmallRng`], so a
//! given seed always produces the same dataset and tests can assert
//! exact values instead of tolerating nondeterminism.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One chart datum: a category label and its numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub name: String,
    pub points: u32,
    pub reduction_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub author: String,
    pub message: String,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditScore {
    pub category: String,
    pub score: u32,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSeed {
    pub name: String,
    pub region: String,
    pub reach: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerVerdict {
    pub dish: String,
    pub estimated_oil_ml: u32,
    pub advice: String,
}

const LEADER_NAMES: [&str; 8] = [
    "Asha V.", "Rohan P.", "Meera K.", "Vikram S.", "Divya N.", "Arjun T.", "Kavita R.", "Nikhil B.",
];

const FEED_MESSAGES: [&str; 5] = [
    "Switched to an oil dispenser this week, down 20%!",
    "Air fryer pakoras actually work. Who knew.",
    "Hit my 14-day streak today.",
    "Our society kitchen swapped palm oil for mustard oil.",
    "Sharing my low-oil tadka recipe in the comments.",
];

const COACH_REPLIES: [&str; 4] = [
    "Try measuring tonight's cooking oil with a tablespoon and tell me the count.",
    "A good next step: swap one deep-fried snack this week for a roasted one.",
    "Your weekly trend is heading down. Keep portions steady on weekends.",
    "Reheating oil more than twice raises trans fats; fresh batches only.",
];

const DISH_ADVICE: [(&str, &str); 3] = [
    ("Aloo Paratha", "Brush with oil instead of shallow frying both sides."),
    ("Vegetable Pulao", "Whole spices bloom fine in half the oil."),
    ("Paneer Curry", "Skip the second tempering; one tadka is enough."),
];

/// Seeded generator bundle for all dashboard sample data.
#[derive(Debug)]
pub struct MockData {
    rng: SmallRng,
}

impl MockData {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Weekly usage series in ml, Monday through Sunday.
    pub fn weekly_usage(&mut self) -> Vec<DataPoint> {
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .iter()
            .map(|day| DataPoint::new(day, f64::from(self.rng.gen_range(20_u32..90))))
            .collect()
    }

    /// Monthly consumption trend for the policy analytics line chart.
    pub fn monthly_trend(&mut self) -> Vec<DataPoint> {
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
            .iter()
            .map(|month| DataPoint::new(month, f64::from(self.rng.gen_range(800_u32..1400))))
            .collect()
    }

    /// Oil-type share for the donut chart; values sum to 100.
    pub fn oil_share(&mut self) -> Vec<DataPoint> {
        let mut remaining = 100_u32;
        let mut points = Vec::new();
        for label in ["Mustard", "Sunflower", "Palm", "Olive"] {
            // At most a third of what's left, so the tail never underflows.
            let cut = self.rng.gen_range(5..=remaining / 3);
            points.push(DataPoint::new(label, f64::from(cut)));
            remaining -= cut;
        }
        points.push(DataPoint::new("Other", f64::from(remaining)));
        points
    }

    pub fn leaderboard(&mut self) -> Vec<LeaderboardRow> {
        let mut rows: Vec<LeaderboardRow> = LEADER_NAMES
            .iter()
            .map(|name| LeaderboardRow {
                rank: 0,
                name: (*name).to_string(),
                points: self.rng.gen_range(500..3000),
                reduction_pct: self.rng.gen_range(5..40),
            })
            .collect();
        rows.sort_by(|a, b| b.points.cmp(&a.points));
        for (i, row) in rows.iter_mut().enumerate() {
            row.rank = u32::try_from(i).unwrap_or(u32::MAX) + 1;
        }
        rows
    }

    pub fn community_feed(&mut self) -> Vec<CommunityPost> {
        FEED_MESSAGES
            .iter()
            .enumerate()
            .map(|(i, message)| CommunityPost {
                author: LEADER_NAMES[i % LEADER_NAMES.len()].to_string(),
                message: (*message).to_string(),
                likes: self.rng.gen_range(2..120),
            })
            .collect()
    }

    /// Partner self-audit scores per category, out of 100.
    pub fn audit_scores(&mut self) -> Vec<AuditScore> {
        ["Oil reuse", "Storage", "Menu labeling", "Portioning", "Sourcing"]
            .iter()
            .map(|category| AuditScore {
                category: (*category).to_string(),
                score: self.rng.gen_range(40..100),
                target: 80,
            })
            .collect()
    }

    pub fn campaigns(&mut self) -> Vec<CampaignSeed> {
        [
            ("Less Oil Pledge", "Maharashtra"),
            ("Healthy Tadka Week", "Karnataka"),
            ("School Canteen Audit", "Tamil Nadu"),
        ]
        .iter()
        .map(|(name, region)| CampaignSeed {
            name: (*name).to_string(),
            region: (*region).to_string(),
            reach: self.rng.gen_range(10_000..250_000),
        })
        .collect()
    }

    /// Mocked "AI" verdict for a submitted dish photo.
    pub fn analyzer_verdict(&mut self) -> AnalyzerVerdict {
        let (dish, advice) = DISH_ADVICE[self.rng.gen_range(0..DISH_ADVICE.len())];
        AnalyzerVerdict {
            dish: dish.to_string(),
            estimated_oil_ml: self.rng.gen_range(10..60),
            advice: advice.to_string(),
        }
    }

    /// Probability roll for the periodic nudge timer.
    pub fn nudge_fires(&mut self, chance: f64) -> bool {
        self.rng.gen_bool(chance.clamp(0.0, 1.0))
    }
}

/// Canned coach reply for the nth user message.
#[must_use]
pub fn coach_reply(turn: usize) -> &'static str {
    COACH_REPLIES[turn % COACH_REPLIES.len()]
}

#[cfg(test)]
mod tests {
    use super::{MockData, coach_reply};

    #[test]
    fn same_seed_same_dataset() {
        let mut a = MockData::new(7);
        let mut b = MockData::new(7);
        assert_eq!(a.weekly_usage(), b.weekly_usage());
        assert_eq!(a.leaderboard(), b.leaderboard());
        assert_eq!(a.analyzer_verdict(), b.analyzer_verdict());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = MockData::new(1);
        let mut b = MockData::new(2);
        assert_ne!(a.weekly_usage(), b.weekly_usage());
    }

    #[test]
    fn weekly_usage_covers_seven_days() {
        let series = MockData::new(0).weekly_usage();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].label, "Mon");
        assert!(series.iter().all(|p| (20.0..90.0).contains(&p.value)));
    }

    #[test]
    fn oil_share_sums_to_hundred() {
        let total: f64 = MockData::new(42).oil_share().iter().map(|p| p.value).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn leaderboard_ranks_descend_by_points() {
        let rows = MockData::new(3).leaderboard();
        assert!(rows.windows(2).all(|w| w[0].points >= w[1].points));
        assert_eq!(rows[0].rank, 1);
    }

    #[test]
    fn coach_replies_cycle() {
        assert_eq!(coach_reply(0), coach_reply(4));
    }
}
