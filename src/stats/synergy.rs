use std::collections::HashMap;

use ndarray::Array2;

use crate::domain::PlayerId;

/// Symmetric same-side co-occurrence counts between players
#[derive(Debug, Clone, PartialEq)]
pub struct SynergyMatrix {
    players: Vec<PlayerId>,
    player_to_idx: HashMap<PlayerId, usize>,
    counts: Array2<u32>,
}

impl SynergyMatrix {
    pub fn new(players: Vec<PlayerId>) -> Self {
        let n_players = players.len();
        let player_to_idx = players
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();

        Self {
            players,
            player_to_idx,
            counts: Array2::<u32>::zeros((n_players, n_players)),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Count for an unordered pair; unknown players and `a == b` read as 0
    pub fn get(&self, a: &str, b: &str) -> u32 {
        match (self.player_to_idx.get(a), self.player_to_idx.get(b)) {
            (Some(&i), Some(&j)) if i != j => self.counts[[i, j]],
            _ => 0,
        }
    }

    /// Sum of counts between `player` and every member of `group`
    pub fn sum_with<'a, I>(&self, player: &str, group: I) -> u32
    where
        I: IntoIterator<Item = &'a PlayerId>,
    {
        group.into_iter().map(|other| self.get(player, other)).sum()
    }

    /// Record one shared match for every unordered pair in `group` (dense indices)
    pub(crate) fn record_group(&mut self, group: &[usize]) {
        for (pos, &i) in group.iter().enumerate() {
            for &j in &group[pos + 1..] {
                self.counts[[i, j]] += 1;
                self.counts[[j, i]] += 1;
            }
        }
    }

    pub(crate) fn index_of(&self, player: &str) -> Option<usize> {
        self.player_to_idx.get(player).copied()
    }

    /// All pairs with a non-zero count, strongest first
    pub fn pairs(&self) -> Vec<(&PlayerId, &PlayerId, u32)> {
        let mut pairs = Vec::new();

        for i in 0..self.players.len() {
            for j in (i + 1)..self.players.len() {
                let count = self.counts[[i, j]];
                if count > 0 {
                    pairs.push((&self.players[i], &self.players[j], count));
                }
            }
        }

        pairs.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)).then_with(|| a.1.cmp(b.1)));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> SynergyMatrix {
        SynergyMatrix::new(vec!["a".into(), "b".into(), "c".into()])
    }

    #[test]
    fn test_record_group_is_symmetric() {
        let mut synergy = matrix();
        synergy.record_group(&[0, 1, 2]);
        synergy.record_group(&[0, 2]);

        assert_eq!(synergy.get("a", "b"), 1);
        assert_eq!(synergy.get("b", "a"), 1);
        assert_eq!(synergy.get("a", "c"), 2);
        assert_eq!(synergy.get("c", "a"), 2);
    }

    #[test]
    fn test_self_and_unknown_pairs_read_zero() {
        let mut synergy = matrix();
        synergy.record_group(&[0, 1]);

        assert_eq!(synergy.get("a", "a"), 0);
        assert_eq!(synergy.get("a", "zed"), 0);
    }

    #[test]
    fn test_pairs_sorted_by_count() {
        let mut synergy = matrix();
        synergy.record_group(&[0, 1, 2]);
        synergy.record_group(&[1, 2]);

        let pairs = synergy.pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!((pairs[0].0.as_str(), pairs[0].1.as_str(), pairs[0].2), ("b", "c", 2));
    }

    #[test]
    fn test_sum_with_group() {
        let mut synergy = matrix();
        synergy.record_group(&[0, 1, 2]);
        synergy.record_group(&[0, 1]);

        let group: Vec<PlayerId> = vec!["b".into(), "c".into()];
        assert_eq!(synergy.sum_with("a", &group), 3);
    }
}
