//! Stats ledger: score, destruction count and bomb supply.
//!
//! Every mutation goes through `StatsLedger::apply`, a pure
//! `(ledger, entry) -> ledger` transition. Score and destruction count
//! only grow; bombs only shrink, and never below zero. `Reset` is the
//! single entry that rewinds them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsLedger {
    pub score: u64,
    pub blocks_destroyed: u32,
    pub bombs_remaining: u32,
    pub bomb_budget: u32,
    /// Explosions resolved this session (projectile and cascade).
    pub explosions: u32,
}

/// A single ledger transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntry {
    /// Damage that did not destroy anything.
    Damage { points: u64 },
    /// One destruction event; counts toward `blocks_destroyed`.
    Destruction { points: u64 },
    BombLaunched,
    Explosion,
    Reset,
}

impl StatsLedger {
    pub fn new(bomb_budget: u32) -> Self {
        Self {
            score: 0,
            blocks_destroyed: 0,
            bombs_remaining: bomb_budget,
            bomb_budget,
            explosions: 0,
        }
    }

    pub fn can_fire(&self) -> bool {
        self.bombs_remaining > 0
    }

    #[must_use]
    pub fn apply(self, entry: LedgerEntry) -> Self {
        match entry {
            LedgerEntry::Damage { points } => Self {
                score: self.score.saturating_add(points),
                ..self
            },
            LedgerEntry::Destruction { points } => Self {
                score: self.score.saturating_add(points),
                blocks_destroyed: self.blocks_destroyed.saturating_add(1),
                ..self
            },
            LedgerEntry::BombLaunched => Self {
                bombs_remaining: self.bombs_remaining.saturating_sub(1),
                ..self
            },
            LedgerEntry::Explosion => Self {
                explosions: self.explosions.saturating_add(1),
                ..self
            },
            LedgerEntry::Reset => Self::new(self.bomb_budget),
        }
    }
}

impl Default for StatsLedger {
    fn default() -> Self {
        Self::new(crate::constants::BOMB_BUDGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bombs_never_go_negative() {
        let mut ledger = StatsLedger::new(1);
        ledger = ledger.apply(LedgerEntry::BombLaunched);
        ledger = ledger.apply(LedgerEntry::BombLaunched);
        assert_eq!(ledger.bombs_remaining, 0);
        assert!(!ledger.can_fire());
    }

    #[test]
    fn damage_scores_without_counting_destruction() {
        let ledger = StatsLedger::new(5).apply(LedgerEntry::Damage { points: 2 });
        assert_eq!(ledger.score, 2);
        assert_eq!(ledger.blocks_destroyed, 0);
    }

    #[test]
    fn reset_restores_budget_and_zeroes_counters() {
        let ledger = StatsLedger::new(3)
            .apply(LedgerEntry::BombLaunched)
            .apply(LedgerEntry::Destruction { points: 15 })
            .apply(LedgerEntry::Explosion)
            .apply(LedgerEntry::Reset);
        assert_eq!(ledger, StatsLedger::new(3));
    }
}
