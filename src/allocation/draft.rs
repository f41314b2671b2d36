use log::debug;

use super::roster::RatedPlayer;
use super::types::{BalancePolicy, Squad};
use crate::stats::SynergyMatrix;

const FIRST: usize = 0;
const SECOND: usize = 1;

/// Squads under construction with their running rating totals
pub struct Draft<'a> {
    synergy: &'a SynergyMatrix,
    squads: [Squad; 2],
    totals: [f64; 2],
}

impl<'a> Draft<'a> {
    pub fn new(synergy: &'a SynergyMatrix) -> Self {
        Self {
            synergy,
            squads: [Squad::new(), Squad::new()],
            totals: [0.0, 0.0],
        }
    }

    /// Place every player in order under `policy`
    pub fn run(
        mut self,
        ordered: &[RatedPlayer],
        policy: BalancePolicy,
        synergy_weight: f64,
    ) -> (Squad, Squad) {
        for (position, player) in ordered.iter().enumerate() {
            let preferred = match policy {
                BalancePolicy::Penalty => self.choose_by_penalty(player, synergy_weight),
                BalancePolicy::SizeFirst => self.choose_by_size(player),
                BalancePolicy::Snake => snake_pick(position),
            };
            self.place(preferred, player);
        }

        let [first, second] = self.squads;
        (first, second)
    }

    /// Falls through to the other squad when the preferred one is full
    fn place(&mut self, preferred: usize, player: &RatedPlayer) {
        let side = if self.squads[preferred].is_full() {
            other(preferred)
        } else {
            preferred
        };

        debug!(
            "  Placing {} ({:.3}) in squad {}",
            player.id,
            player.rating,
            side + 1
        );
        self.squads[side].push(player.id.clone());
        self.totals[side] += player.rating;
    }

    fn choose_by_penalty(&self, player: &RatedPlayer, synergy_weight: f64) -> usize {
        let penalty_first = self.penalty(FIRST, player, synergy_weight);
        let penalty_second = self.penalty(SECOND, player, synergy_weight);

        let first_open = !self.squads[FIRST].is_full();
        let second_full = self.squads[SECOND].is_full();

        if first_open && (second_full || penalty_first < penalty_second) {
            FIRST
        } else {
            SECOND
        }
    }

    fn penalty(&self, side: usize, player: &RatedPlayer, synergy_weight: f64) -> f64 {
        let synergy = self.synergy_with(side, player) as f64;
        let gap = (self.totals[side] + player.rating) - self.totals[other(side)];
        synergy_weight * synergy + gap.abs()
    }

    fn choose_by_size(&self, player: &RatedPlayer) -> usize {
        let first_len = self.squads[FIRST].len();
        let second_len = self.squads[SECOND].len();

        if first_len != second_len {
            return if first_len < second_len { FIRST } else { SECOND };
        }

        if self.synergy_with(SECOND, player) < self.synergy_with(FIRST, player) {
            SECOND
        } else {
            FIRST
        }
    }

    fn synergy_with(&self, side: usize, player: &RatedPlayer) -> u32 {
        self.synergy.sum_with(&player.id, &self.squads[side])
    }
}

fn other(side: usize) -> usize {
    1 - side
}

/// A, B, B, A, A, B, B, ...
fn snake_pick(position: usize) -> usize {
    let round = position / 2;
    let within = position % 2;
    if round % 2 == 0 { within } else { other(within) }
}
