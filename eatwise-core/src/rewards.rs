//! Reward catalog and point claim/redeem rules layered on the ledger.

use crate::points::PointsLedger;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardError {
    #[error("not enough points for this reward")]
    InsufficientPoints,
    #[error("unknown reward")]
    UnknownReward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    /// Adds points to the ledger when claimed.
    Bonus,
    /// Costs points to redeem.
    Redeemable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub kind: RewardKind,
    /// Points granted for a bonus, points charged for a redeemable.
    pub points: i64,
}

/// Fixed in-memory catalog; same every session.
#[must_use]
pub const fn catalog() -> &'static [Reward] {
    &[
        Reward {
            id: "daily-checkin",
            title: "Daily check-in",
            detail: "Open the app and log at least one meal",
            kind: RewardKind::Bonus,
            points: 50,
        },
        Reward {
            id: "weekly-streak",
            title: "7-day streak bonus",
            detail: "Log oil usage every day for a week",
            kind: RewardKind::Bonus,
            points: 200,
        },
        Reward {
            id: "discount-coupon",
            title: "Partner restaurant coupon",
            detail: "10% off at certified low-oil partners",
            kind: RewardKind::Redeemable,
            points: 500,
        },
        Reward {
            id: "oil-dispenser",
            title: "Measured oil dispenser",
            detail: "Ships within two weeks",
            kind: RewardKind::Redeemable,
            points: 1500,
        },
        Reward {
            id: "health-checkup",
            title: "Free lipid profile test",
            detail: "At partnered diagnostic labs",
            kind: RewardKind::Redeemable,
            points: 2500,
        },
    ]
}

fn find(id: &str) -> Result<&'static Reward, RewardError> {
    catalog()
        .iter()
        .find(|r| r.id == id)
        .ok_or(RewardError::UnknownReward)
}

/// Claim a bonus reward, crediting the ledger.
///
/// # Errors
/// `UnknownReward` when the id is not a bonus in the catalog.
pub fn claim_bonus(ledger: &mut PointsLedger, id: &str) -> Result<i64, RewardError> {
    let reward = find(id)?;
    if reward.kind != RewardKind::Bonus {
        return Err(RewardError::UnknownReward);
    }
    ledger.add(reward.points);
    Ok(reward.points)
}

/// Redeem a reward, charging the ledger.
///
/// # Errors
/// `UnknownReward` for bad ids or bonus ids; `InsufficientPoints` when
/// the balance cannot cover the cost (the ledger is left unchanged).
pub fn redeem(ledger: &mut PointsLedger, id: &str) -> Result<i64, RewardError> {
    let reward = find(id)?;
    if reward.kind != RewardKind::Redeemable {
        return Err(RewardError::UnknownReward);
    }
    if ledger.balance() < reward.points {
        return Err(RewardError::InsufficientPoints);
    }
    ledger.deduct(reward.points);
    Ok(reward.points)
}

#[cfg(test)]
mod tests {
    use super::{RewardError, claim_bonus, redeem};
    use crate::points::PointsLedger;

    #[test]
    fn daily_checkin_adds_fifty() {
        let mut ledger = PointsLedger::default();
        let granted = claim_bonus(&mut ledger, "daily-checkin").unwrap();
        assert_eq!(granted, 50);
        assert_eq!(ledger.balance(), 1900);
    }

    #[test]
    fn redeem_charges_the_ledger() {
        let mut ledger = PointsLedger::default();
        redeem(&mut ledger, "discount-coupon").unwrap();
        assert_eq!(ledger.balance(), 1350);
    }

    #[test]
    fn redeem_fails_without_balance() {
        let mut ledger = PointsLedger::new(100);
        assert_eq!(
            redeem(&mut ledger, "health-checkup"),
            Err(RewardError::InsufficientPoints)
        );
        assert_eq!(ledger.balance(), 100);
    }

    #[test]
    fn kind_mismatch_is_unknown() {
        let mut ledger = PointsLedger::default();
        assert_eq!(
            redeem(&mut ledger, "daily-checkin"),
            Err(RewardError::UnknownReward)
        );
        assert_eq!(
            claim_bonus(&mut ledger, "discount-coupon"),
            Err(RewardError::UnknownReward)
        );
        assert_eq!(
            claim_bonus(&mut ledger, "nope"),
            Err(RewardError::UnknownReward)
        );
    }
}
