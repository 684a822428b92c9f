use serde::{Deserialize, Serialize};

/// Balance every session starts from.
pub const SESSION_SEED_POINTS: i64 = 1850;

/// In-memory reward-points counter. Never persisted; a reload starts a
/// fresh ledger at [`SESSION_SEED_POINTS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsLedger {
    balance: i64,
}

impl Default for PointsLedger {
    fn default() -> Self {
        Self {
            balance: SESSION_SEED_POINTS,
        }
    }
}

impl PointsLedger {
    #[must_use]
    pub const fn new(balance: i64) -> Self {
        Self { balance }
    }

    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Add points. Negative amounts are accepted; validating the sign is
    /// the caller's responsibility.
    pub fn add(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Deduct points, flooring the balance at zero.
    pub fn deduct(&mut self, amount: i64) {
        self.balance = self.balance.saturating_sub(amount).max(0);
    }

    /// Overwrite the balance outright.
    pub fn set(&mut self, amount: i64) {
        self.balance = amount;
    }
}

#[cfg(test)]
mod tests {
    use super::{PointsLedger, SESSION_SEED_POINTS};

    #[test]
    fn ledger_starts_at_session_seed() {
        assert_eq!(PointsLedger::default().balance(), SESSION_SEED_POINTS);
    }

    #[test]
    fn deduct_floors_at_zero() {
        let mut ledger = PointsLedger::new(10);
        ledger.deduct(50);
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn claim_style_add_moves_seed_balance() {
        let mut ledger = PointsLedger::default();
        ledger.add(50);
        assert_eq!(ledger.balance(), 1900);
    }

    #[test]
    fn add_accepts_negative_amounts() {
        let mut ledger = PointsLedger::new(5);
        ledger.add(-20);
        assert_eq!(ledger.balance(), -15);
        ledger.set(100);
        assert_eq!(ledger.balance(), 100);
    }
}
