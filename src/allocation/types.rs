use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::rating::RatingPolicy;

pub const SQUAD_SIZE: usize = 5;
pub const ROSTER_SIZE: usize = 2 * SQUAD_SIZE;

/// Rule used to place each player once the roster is sorted by rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalancePolicy {
    /// Lowest of synergy penalty plus running rating gap
    Penalty,
    /// Smaller squad first, lower synergy on equal size
    SizeFirst,
    /// A, B, B, A, A, B, ... over the sorted roster
    Snake,
}

impl BalancePolicy {
    pub fn as_str(&self) -> &str {
        match self {
            BalancePolicy::Penalty => "penalty",
            BalancePolicy::SizeFirst => "size-first",
            BalancePolicy::Snake => "snake",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationOptions {
    pub synergy_weight: f64,
    pub policy: BalancePolicy,
    pub rating: RatingPolicy,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            synergy_weight: 1.0,
            policy: BalancePolicy::Penalty,
            rating: RatingPolicy::AverageScore,
        }
    }
}

/// Five players drawn to play on the same side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    members: Vec<PlayerId>,
}

impl Squad {
    pub fn new() -> Self {
        Self {
            members: Vec::with_capacity(SQUAD_SIZE),
        }
    }

    pub(crate) fn push(&mut self, player: PlayerId) {
        self.members.push(player);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= SQUAD_SIZE
    }

    pub fn contains(&self, player: &str) -> bool {
        self.members.iter().any(|m| m == player)
    }

    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerId> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a Squad {
    type Item = &'a PlayerId;
    type IntoIter = std::slice::Iter<'a, PlayerId>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
